//! Received-character dispatch and button identity

/// What a received character does to the LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixAction {
    /// Show a digit 0-9 in its assigned color
    ShowDigit(u8),
    /// Anything that is not an ASCII digit clears the matrix
    Clear,
}

/// Classify a received character for the matrix.
pub fn matrix_action(c: char) -> MatrixAction {
    if c.is_ascii_digit() {
        MatrixAction::ShowDigit(c as u8 - b'0')
    } else {
        MatrixAction::Clear
    }
}

/// The two user buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_their_value() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(matrix_action(c), MatrixAction::ShowDigit(i as u8));
        }
    }

    #[test]
    fn seven_shows_digit_seven() {
        assert_eq!(matrix_action('7'), MatrixAction::ShowDigit(7));
    }

    #[test]
    fn non_digits_clear_the_matrix() {
        for c in ['X', 'a', ' ', '\n', '\0', '-', 'ã', '٣'] {
            assert_eq!(matrix_action(c), MatrixAction::Clear, "char {c:?}");
        }
    }
}
