use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::content::Sport;

pub const MAX_NAME_LEN: usize = 60;
pub const MAX_NOTES_LEN: usize = 300;
pub const BOOKING_WINDOW_DAYS: i64 = 60;
pub const FIRST_SLOT_HOUR: u32 = 6;
pub const LAST_SLOT_HOUR: u32 = 22;

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Name must be at most 60 characters")]
    NameTooLong,
    #[error("Please enter a valid phone number (10-13 digits)")]
    InvalidPhone,
    #[error("Please choose a sport")]
    UnknownSport,
    #[error("Please pick a valid date")]
    InvalidDate,
    #[error("Bookings can't be made for past dates")]
    DateInPast,
    #[error("Bookings open at most 60 days ahead")]
    DateTooFar,
    #[error("Please pick a time slot between 06:00 and 22:00")]
    InvalidTime,
    #[error("{sport} bookings take 1 to {max} players")]
    PlayersOutOfRange { sport: &'static str, max: u8 },
    #[error("Notes must be at most 300 characters")]
    NotesTooLong,
}

/// Hourly slots offered in the booking form, `"06:00"` through `"22:00"`.
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| format!("{:02}:00", hour))
        .collect()
}

/// Raw values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub sport: String,
    pub date: String,
    pub time: String,
    pub players: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub sport: Sport,
    pub date: NaiveDate,
    pub time: String,
    pub players: u8,
    pub notes: Option<String>,
}

fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", trimmed),
    };
    let digits: String = rest.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if !(10..=13).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}{}", plus, digits))
}

impl BookingForm {
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, BookingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BookingError::MissingName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(BookingError::NameTooLong);
        }

        let phone = normalize_phone(&self.phone).ok_or(BookingError::InvalidPhone)?;
        let sport = Sport::from_slug(self.sport.trim()).ok_or(BookingError::UnknownSport)?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate)?;
        if date < today {
            return Err(BookingError::DateInPast);
        }
        if date > today + Duration::days(BOOKING_WINDOW_DAYS) {
            return Err(BookingError::DateTooFar);
        }

        let time = self.time.trim();
        if !time_slots().iter().any(|slot| slot == time) {
            return Err(BookingError::InvalidTime);
        }

        let players = self
            .players
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=sport.max_players()).contains(n))
            .ok_or(BookingError::PlayersOutOfRange {
                sport: sport.name(),
                max: sport.max_players(),
            })?;

        let notes = self.notes.trim();
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(BookingError::NotesTooLong);
        }

        Ok(BookingRequest {
            name: name.to_string(),
            phone,
            sport,
            date,
            time: time.to_string(),
            players,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

impl BookingRequest {
    pub fn message(&self) -> String {
        let mut message = format!(
            "Hi Athlon Sports! I'd like to book a slot.\n\n\
             Name: {}\n\
             Phone: {}\n\
             Sport: {} {}\n\
             Date: {}\n\
             Time: {}\n\
             Players: {}\n\
             Estimated cost: ₹{}/hr",
            self.name,
            self.phone,
            self.sport.icon(),
            self.sport.name(),
            self.date.format("%a, %d %b %Y"),
            self.time,
            self.players,
            self.sport.hourly_rate(),
        );
        if let Some(notes) = &self.notes {
            message.push_str("\nNotes: ");
            message.push_str(notes);
        }
        message
    }

    /// Deep link that opens a WhatsApp chat with the message pre-filled.
    pub fn whatsapp_url(&self, number: &str) -> String {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        format!(
            "https://wa.me/{}?text={}",
            digits,
            urlencoding::encode(&self.message())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn form() -> BookingForm {
        BookingForm {
            name: "  Rohan Mehta ".to_string(),
            phone: "+91 98200-12345".to_string(),
            sport: "cricket".to_string(),
            date: "2024-03-12".to_string(),
            time: "18:00".to_string(),
            players: "10".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = form().validate(today()).unwrap();
        assert_eq!(request.name, "Rohan Mehta");
        assert_eq!(request.phone, "+919820012345");
        assert_eq!(request.sport, Sport::Cricket);
        assert_eq!(request.players, 10);
        assert_eq!(request.notes, None);
    }

    #[test]
    fn whatsapp_url_encodes_message() {
        let request = form().validate(today()).unwrap();
        let url = request.whatsapp_url("+91 98200 12345");
        assert!(url.starts_with("https://wa.me/919820012345?text="));
        assert!(url.contains("Name%3A%20Rohan%20Mehta"));
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
    }

    #[test]
    fn message_lists_booking_details() {
        let mut form = form();
        form.notes = "Need a bowling machine".to_string();
        let message = form.validate(today()).unwrap().message();
        assert!(message.contains("Sport: 🏏 Cricket"));
        assert!(message.contains("Date: Tue, 12 Mar 2024"));
        assert!(message.contains("Time: 18:00"));
        assert!(message.contains("Estimated cost: ₹1200/hr"));
        assert!(message.ends_with("Notes: Need a bowling machine"));
    }

    #[test]
    fn rejects_blank_name() {
        let mut form = form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(today()), Err(BookingError::MissingName));
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        for phone in ["12345", "98200abcde", "+91 98200 12345 6789", ""] {
            let mut form = form();
            form.phone = phone.to_string();
            assert_eq!(form.validate(today()), Err(BookingError::InvalidPhone), "{}", phone);
        }
    }

    #[test]
    fn rejects_unknown_sport() {
        let mut form = form();
        form.sport = "polo".to_string();
        assert_eq!(form.validate(today()), Err(BookingError::UnknownSport));
    }

    #[test]
    fn date_rules() {
        let mut form = form();
        form.date = "12/03/2024".to_string();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidDate));

        form.date = "2024-03-09".to_string();
        assert_eq!(form.validate(today()), Err(BookingError::DateInPast));

        form.date = "2024-03-10".to_string();
        assert!(form.validate(today()).is_ok());

        form.date = "2024-05-10".to_string();
        assert_eq!(form.validate(today()), Err(BookingError::DateTooFar));
    }

    #[test]
    fn only_offered_slots_are_accepted() {
        let mut form = form();
        form.time = "05:00".to_string();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidTime));
        form.time = "22:00".to_string();
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn player_count_is_capped_per_sport() {
        let mut form = form();
        form.sport = "tennis".to_string();
        form.players = "5".to_string();
        let err = form.validate(today()).unwrap_err();
        assert_eq!(err, BookingError::PlayersOutOfRange { sport: "Tennis", max: 4 });
        assert_eq!(err.to_string(), "Tennis bookings take 1 to 4 players");

        form.players = "0".to_string();
        assert!(form.validate(today()).is_err());
        form.players = "4".to_string();
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn rejects_long_notes() {
        let mut form = form();
        form.notes = "x".repeat(MAX_NOTES_LEN + 1);
        assert_eq!(form.validate(today()), Err(BookingError::NotesTooLong));
    }

    #[test]
    fn slots_cover_opening_hours() {
        let slots = time_slots();
        assert_eq!(slots.first().map(String::as_str), Some("06:00"));
        assert_eq!(slots.last().map(String::as_str), Some("22:00"));
        assert_eq!(slots.len(), 17);
    }
}
