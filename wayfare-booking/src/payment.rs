use std::time::Duration;

/// Fixed token sent in place of a real gateway credential. Card details
/// never leave the client; the backend records the reservation against
/// this placeholder.
pub const PLACEHOLDER_PAYMENT_TOKEN: &str = "tok_simulated";

/// Fixed delay modelling the payment round-trip before the reservation
/// request is issued. A UX pause, not a retry or a network call.
pub const PAYMENT_SIMULATION_DELAY: Duration = Duration::from_millis(2000);

/// Card input fields, used only for a superficial readiness check that
/// gates the submit control. Nothing here is validated against a payment
/// network or transmitted verbatim.
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
}

impl CardForm {
    /// Readiness: 16 digits after stripping whitespace, an `MM/YY`
    /// expiry with a real month, and a CVC of at least 3 digits.
    pub fn is_ready(&self) -> bool {
        let digits: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        let number_ok = digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit());
        number_ok && expiry_matches(&self.expiry) && cvc_ok(&self.cvc)
    }
}

fn expiry_matches(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    let digits_ok = [0, 1, 3, 4]
        .iter()
        .all(|&i| (bytes[i] as char).is_ascii_digit());
    if !digits_ok {
        return false;
    }
    matches!(expiry[..2].parse::<u8>(), Ok(1..=12))
}

fn cvc_ok(cvc: &str) -> bool {
    cvc.len() >= 3 && cvc.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str, expiry: &str, cvc: &str) -> CardForm {
        CardForm {
            number: number.to_string(),
            expiry: expiry.to_string(),
            cvc: cvc.to_string(),
        }
    }

    #[test]
    fn spaced_sixteen_digit_card_is_ready() {
        assert!(card("4242 4242 4242 4242", "12/29", "123").is_ready());
    }

    #[test]
    fn short_cvc_is_not_ready() {
        assert!(!card("4242 4242 4242 4242", "12/29", "12").is_ready());
    }

    #[test]
    fn wrong_length_or_non_digit_number_is_not_ready() {
        assert!(!card("4242 4242 4242 424", "12/29", "123").is_ready());
        assert!(!card("4242 4242 4242 424x", "12/29", "123").is_ready());
    }

    #[test]
    fn expiry_must_match_mm_slash_yy() {
        assert!(!card("4242424242424242", "13/29", "123").is_ready());
        assert!(!card("4242424242424242", "1229", "123").is_ready());
        assert!(!card("4242424242424242", "1/29", "123").is_ready());
        assert!(card("4242424242424242", "01/29", "123").is_ready());
    }
}
