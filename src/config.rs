use crate::api::DEFAULT_ENDPOINT;
use crate::route::HOME_PATH;
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Terminal board for job vacancies", long_about = None)]
pub struct Opts {
    /// Vacancy list endpoint
    #[arg(short, long, env, default_value_t = String::from(DEFAULT_ENDPOINT))]
    pub endpoint: String,

    /// Path to open on start
    #[arg(short, long, env = "START_PATH", default_value_t = String::from(HOME_PATH))]
    pub path: String,

    /// Log level of application
    #[arg(short, long, env, default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// Where log lines go; the terminal belongs to the UI
    #[arg(long, env, default_value = "vacancy-board.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Opts::try_parse_from(["vacancy-board"]).unwrap();

        assert_eq!(opts.endpoint, "http://localhost:8000/vacancies");
        assert_eq!(opts.path, "/");
        assert_eq!(opts.log, LevelFilter::INFO);
        assert_eq!(opts.log_file, PathBuf::from("vacancy-board.log"));
    }

    #[test]
    fn test_overrides() {
        let opts = Opts::try_parse_from([
            "vacancy-board",
            "--endpoint",
            "http://example.test/vacancies",
            "--path",
            "/vacs",
            "--log",
            "debug",
        ])
        .unwrap();

        assert_eq!(opts.endpoint, "http://example.test/vacancies");
        assert_eq!(opts.path, "/vacs");
        assert_eq!(opts.log, LevelFilter::DEBUG);
    }

    #[test]
    fn debug_assert() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
