//! Window icon: a small IC package drawn at startup.

use iced::window::icon::{self, Icon};

const SIZE: u32 = 32;

const BODY: [u8; 4] = [0x2b, 0x2f, 0x36, 0xff];
const PIN: [u8; 4] = [0xc8, 0xa2, 0x3c, 0xff];
const MARK: [u8; 4] = [0xe8, 0xe8, 0xe8, 0xff];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Colour of one pixel.
fn pixel(x: u32, y: u32) -> [u8; 4] {
    let in_body_x = (8..24).contains(&x);
    let in_body_y = (4..28).contains(&y);

    if in_body_x && in_body_y {
        // Pin 1 marker
        if (10..13).contains(&x) && (6..9).contains(&y) {
            return MARK;
        }
        return BODY;
    }

    let pin_column = (3..8).contains(&x) || (24..29).contains(&x);
    let pin_row = (6..26).contains(&y) && (y - 6) % 5 < 3;
    if pin_column && pin_row {
        return PIN;
    }

    CLEAR
}

fn rgba() -> Vec<u8> {
    (0..SIZE)
        .flat_map(|y| (0..SIZE).map(move |x| (x, y)))
        .flat_map(|(x, y)| pixel(x, y))
        .collect()
}

/// The application icon, or `None` if the platform rejects it.
pub fn app_icon() -> Option<Icon> {
    match icon::from_rgba(rgba(), SIZE, SIZE) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("Window icon unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_covers_every_pixel() {
        assert_eq!(rgba().len(), (SIZE * SIZE * 4) as usize);
    }

    #[test]
    fn icon_is_built() {
        assert!(app_icon().is_some());
    }

    #[test]
    fn body_pins_and_background_differ() {
        assert_eq!(pixel(16, 16), BODY);
        assert_eq!(pixel(4, 6), PIN);
        assert_eq!(pixel(27, 21), PIN);
        assert_eq!(pixel(0, 0), CLEAR);
        assert_eq!(pixel(11, 7), MARK);
    }
}
