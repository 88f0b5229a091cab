//! Digit glyphs and colors for the 5x5 WS2812 matrix
//!
//! A frame is 25 packed GRB words in the matrix chain's transmit order.
//! The BitDogLab wires its matrix as a serpentine chain, so the mask
//! tables below are stored in chain order, not in reading order.

use smart_leds::RGB8;

/// Number of LEDs in the matrix chain (5x5 grid).
pub const MATRIX_SIZE: usize = 25;

/// One ready-to-transmit matrix frame of packed GRB words.
pub type Frame = [u32; MATRIX_SIZE];

/// On/off mask for each digit, 1 = lit. Rows of five follow the chain
/// wiring order of the board.
#[rustfmt::skip]
pub const DIGIT_PATTERNS: [[u8; MATRIX_SIZE]; 10] = [
    // 0
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 1
    [1, 1, 1, 1, 1,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 1,
     0, 1, 1, 0, 0,
     0, 0, 1, 0, 0],
    // 2
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 3
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 4
    [1, 0, 0, 0, 0,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1],
    // 5
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1],
    // 6
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1],
    // 7
    [0, 0, 0, 0, 1,
     0, 1, 0, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 0, 1, 0,
     1, 1, 1, 1, 1],
    // 8
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 9
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
];

/// Color assigned to each digit, dimmed well below full drive so the
/// matrix is comfortable to look at indoors.
pub fn digit_color(digit: u8) -> RGB8 {
    match digit {
        0 => RGB8::new(0, 0, 102),     // blue
        1 => RGB8::new(0, 102, 0),     // green
        2 => RGB8::new(0, 102, 102),   // cyan
        3 => RGB8::new(102, 0, 0),     // red
        4 => RGB8::new(102, 0, 102),   // magenta
        5 => RGB8::new(102, 102, 0),   // yellow
        6 => RGB8::new(102, 102, 102), // white
        7 => RGB8::new(25, 102, 63),   // sea green
        8 => RGB8::new(0, 51, 102),    // azure
        9 => RGB8::new(127, 63, 25),   // copper
        _ => RGB8::new(76, 51, 38),    // amber fallback for out-of-range values
    }
}

/// Pack a color into the word the WS2812 chain expects: green in the top
/// byte, then red, then blue. The PIO shifts out the top 24 bits MSB-first.
pub const fn grb_word(color: RGB8) -> u32 {
    ((color.g as u32) << 24) | ((color.r as u32) << 16) | ((color.b as u32) << 8)
}

/// Frame with every LED dark.
pub const fn blank_frame() -> Frame {
    [0; MATRIX_SIZE]
}

/// Frame showing `digit` in its assigned color. Lit cells carry the
/// digit's GRB word, unlit cells stay zero. Callers guarantee 0-9.
pub fn digit_frame(digit: u8) -> Frame {
    let word = grb_word(digit_color(digit));
    let mut frame = blank_frame();
    for (cell, &on) in frame.iter_mut().zip(DIGIT_PATTERNS[digit as usize].iter()) {
        if on != 0 {
            *cell = word;
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn masks_are_binary() {
        for pattern in DIGIT_PATTERNS.iter() {
            assert!(pattern.iter().all(|&cell| cell <= 1));
        }
    }

    #[test]
    fn every_digit_frame_matches_its_mask_and_color() {
        for digit in 0..=9u8 {
            let frame = digit_frame(digit);
            let word = grb_word(digit_color(digit));
            for (i, &cell) in frame.iter().enumerate() {
                if DIGIT_PATTERNS[digit as usize][i] != 0 {
                    assert_eq!(cell, word, "digit {digit} cell {i}");
                } else {
                    assert_eq!(cell, 0, "digit {digit} cell {i}");
                }
            }
        }
    }

    #[test]
    fn digit_frames_use_a_single_color() {
        for digit in 0..=9u8 {
            let frame = digit_frame(digit);
            let lit: usize = frame.iter().filter(|&&cell| cell != 0).count();
            let expected: usize = DIGIT_PATTERNS[digit as usize]
                .iter()
                .map(|&cell| cell as usize)
                .sum();
            assert_eq!(lit, expected);
        }
    }

    #[test]
    fn seven_lights_the_seven_glyph_in_sea_green() {
        let frame = digit_frame(7);
        let word = grb_word(RGB8::new(25, 102, 63));
        assert_eq!(frame[4], word); // chain start row carries the tip
        assert_eq!(frame[0], 0);
        assert_eq!(frame[20..25], [word; 5]); // top bar
    }

    #[test]
    fn blank_frame_is_all_dark() {
        assert!(blank_frame().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn out_of_range_values_fall_back_to_amber() {
        let amber = RGB8::new(76, 51, 38);
        assert_eq!(digit_color(10), amber);
        assert_eq!(digit_color(255), amber);
    }

    #[test]
    fn digit_colors_are_distinct() {
        for a in 0..=9u8 {
            for b in (a + 1)..=9u8 {
                assert_ne!(digit_color(a), digit_color(b), "digits {a} and {b}");
            }
        }
    }

    proptest! {
        /// Byte lanes in the packed word: green, red, blue, zero.
        #[test]
        fn grb_word_places_each_channel(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let word = grb_word(RGB8::new(r, g, b));
            prop_assert_eq!((word >> 24) as u8, g);
            prop_assert_eq!((word >> 16) as u8, r);
            prop_assert_eq!((word >> 8) as u8, b);
            prop_assert_eq!(word as u8, 0);
        }
    }
}
