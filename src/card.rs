/// Text used in every field of a placeholder card.
pub const PLACEHOLDER_TEXT: &str = "test_error";

/// How many placeholder cards replace a failed load.
pub const PLACEHOLDER_COUNT: usize = 3;

pub const COMPANY_LABEL: &str = "Компания";
pub const LOCATION_LABEL: &str = "Город";
pub const SALARY_LABEL: &str = "Зарплата";
pub const DESCRIPTION_LABEL: &str = "Описание";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub label: &'static str,
    pub value: String,
}

/// A rendered vacancy: a heading and four labeled lines in fixed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub heading: String,
    pub lines: [Line; 4],
}

pub fn vacancy_card(
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    description: &str,
) -> Card {
    let line = |label, value: &str| Line {
        label,
        value: value.to_string(),
    };

    Card {
        heading: title.to_string(),
        lines: [
            line(COMPANY_LABEL, company),
            line(LOCATION_LABEL, location),
            line(SALARY_LABEL, salary),
            line(DESCRIPTION_LABEL, description),
        ],
    }
}

impl Card {
    pub fn placeholder() -> Self {
        vacancy_card(
            PLACEHOLDER_TEXT,
            PLACEHOLDER_TEXT,
            PLACEHOLDER_TEXT,
            PLACEHOLDER_TEXT,
            PLACEHOLDER_TEXT,
        )
    }

    #[cfg(test)]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }

    /// HTML fragment for the card.
    ///
    /// Field text is interpolated as-is, no escaping. Anything that feeds
    /// this markup to a real HTML engine inherits that injection risk.
    pub fn markup(&self) -> String {
        let mut out = String::from("<div class=\"vacancy\">\n");
        out.push_str(&format!("    <h3>{}</h3>\n", self.heading));
        for l in &self.lines {
            out.push_str(&format!(
                "    <p><strong>{}:</strong> {}</p>\n",
                l.label, l.value
            ));
        }
        out.push_str("</div>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_layout() {
        let card = vacancy_card("Backend Dev", "Acme", "Remote", "$100k", "Build APIs");

        assert_eq!(card.heading, "Backend Dev");
        let labels: Vec<_> = card.lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![COMPANY_LABEL, LOCATION_LABEL, SALARY_LABEL, DESCRIPTION_LABEL]
        );
        assert_eq!(card.value(COMPANY_LABEL), Some("Acme"));
        assert_eq!(card.value(LOCATION_LABEL), Some("Remote"));
        assert_eq!(card.value(SALARY_LABEL), Some("$100k"));
        assert_eq!(card.value(DESCRIPTION_LABEL), Some("Build APIs"));
    }

    #[test]
    fn test_markup() {
        let card = vacancy_card("Backend Dev", "Acme", "Remote", "$100k", "Build APIs");
        let html = card.markup();

        assert!(html.starts_with("<div class=\"vacancy\">"));
        assert!(html.contains("<h3>Backend Dev</h3>"));
        assert!(html.contains("<p><strong>Компания:</strong> Acme</p>"));
        assert!(html.contains("<p><strong>Город:</strong> Remote</p>"));
        assert!(html.contains("<p><strong>Зарплата:</strong> $100k</p>"));
        assert!(html.contains("<p><strong>Описание:</strong> Build APIs</p>"));
    }

    #[test]
    fn test_markup_does_not_escape() {
        let card = vacancy_card("<b>x</b>", "a&b", "", "", "");

        assert!(card.markup().contains("<h3><b>x</b></h3>"));
        assert!(card.markup().contains("a&b"));
    }

    #[test]
    fn test_placeholder() {
        let card = Card::placeholder();

        assert_eq!(card.heading, PLACEHOLDER_TEXT);
        assert!(card.lines.iter().all(|l| l.value == PLACEHOLDER_TEXT));
    }
}
