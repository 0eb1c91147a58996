use chrono::{DateTime, Local};
use git2::{Signature, Time};

use crate::error::Result;
use crate::git::Author;

/// Build a signature stamped with `when`, keeping its UTC offset
pub fn signature_at(author: &Author, when: DateTime<Local>) -> Result<Signature<'static>> {
    let offset_minutes = when.offset().local_minus_utc() / 60;
    let time = Time::new(when.timestamp(), offset_minutes);
    Ok(Signature::new(&author.name, &author.email, &time)?)
}

/// Build a signature stamped with the current local time
pub fn signature_now(author: &Author) -> Result<Signature<'static>> {
    signature_at(author, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn author() -> Author {
        Author {
            name: "ActionsGo Bot".to_string(),
            email: "actions-go@users.noreply.github.com".to_string(),
        }
    }

    #[test]
    fn test_signature_keeps_name_and_email() {
        let sig = signature_now(&author()).unwrap();
        assert_eq!(sig.name(), Some("ActionsGo Bot"));
        assert_eq!(sig.email(), Some("actions-go@users.noreply.github.com"));
    }

    #[test]
    fn test_signature_time_and_offset() {
        let when = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local);
        let sig = signature_at(&author(), when).unwrap();
        assert_eq!(sig.when().seconds(), when.timestamp());
        assert_eq!(
            sig.when().offset_minutes(),
            when.offset().local_minus_utc() / 60
        );
    }

    #[test]
    fn test_signature_rejects_angle_brackets() {
        let bad = Author {
            name: "<bot>".to_string(),
            email: "bot@example.com".to_string(),
        };
        assert!(signature_now(&bad).is_err());
    }
}
