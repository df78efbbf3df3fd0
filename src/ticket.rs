//! Ticket id generation and record timestamps.

use jiff::Timestamp;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

/// Shape of every generated ticket id: UTC date, dash, 4-char suffix.
pub static TICKET_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{8}-[A-Z0-9]{4}$").unwrap());

const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 4;

/// Generate a ticket id of the form `YYYYMMDD-XXXX`.
///
/// The date half is the current UTC date; the suffix is 4 characters drawn
/// from the uppercase base-36 alphabet. Ids are not checked against prior
/// records, so a same-day collision is possible (and accepted).
pub fn generate_ticket_id() -> String {
    let ymd = Timestamp::now().strftime("%Y%m%d").to_string();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{ymd}-{suffix}")
}

/// Current ISO 8601 timestamp without fractional seconds, for `createdAt`.
pub fn iso_timestamp() -> String {
    Timestamp::now().strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}
