// Fields extracted from an accepted email address.

use std::fmt;

use serde::Serialize;

/// The four fields of an email address.
///
/// For `ab@mail.example.com` the fields are `ab`, `mail`, `example` and
/// `com`. With more than three domain labels everything before the last two
/// labels is joined into `host`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailAddress {
    pub username: String,
    pub host: String,
    pub second_level_domain: String,
    pub top_level_domain: String,
}

impl EmailAddress {
    pub fn clear(&mut self) {
        self.username.clear();
        self.host.clear();
        self.second_level_domain.clear();
        self.top_level_domain.clear();
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Username:   {}", self.username)?;
        writeln!(f, "Local Host: {}", self.host)?;
        writeln!(f, "SLD:        {}", self.second_level_domain)?;
        write!(f, "TLD:        {}", self.top_level_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels_each_field() {
        let address = EmailAddress {
            username: "ab".into(),
            host: "cd".into(),
            second_level_domain: "ef".into(),
            top_level_domain: "gh".into(),
        };
        assert_eq!(
            address.to_string(),
            "Username:   ab\nLocal Host: cd\nSLD:        ef\nTLD:        gh"
        );
    }

    #[test]
    fn clear_empties_all_fields() {
        let mut address = EmailAddress {
            username: "a".into(),
            host: "b".into(),
            second_level_domain: "c".into(),
            top_level_domain: "d".into(),
        };
        address.clear();
        assert_eq!(address, EmailAddress::default());
    }
}
