// The demo screen the lens is shown over when no camera or image is given.
// Visual: a phone-style column with a header, a row of round avatars, three
// cards (picture + title + text), a paragraph and a final picture. Pictures
// are grids so the bulge is easy to read.

use crate::draw::{draw_text_scaled, fill_circle, fill_rect, fill_round_rect};
use crate::types::FrameBuffer;

const BACKGROUND: u32 = 0x00FAFAFA;
const CARD: u32 = 0x00FFFFFF;
const SHADOW: u32 = 0x00D8D8D8;
const INK: u32 = 0x00202020;
const MUTED: u32 = 0x00505050;
const PADDING: i32 = 16;

const AVATAR_COLORS: [u32; 5] = [0x003DDC84, 0x004285F4, 0x00F4B400, 0x00DB4437, 0x00AB47BC];

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

/// Render the demo screen at `width`x`height`. Same size, same pixels.
pub fn demo_screen(width: usize, height: usize) -> FrameBuffer {
    let mut fb = FrameBuffer::filled(width, height, BACKGROUND);
    let w = width as i32;
    let inner = w - 2 * PADDING;
    let mut y = PADDING;

    draw_text_scaled(&mut fb, PADDING, y, "Welcome to the Complex Screen!", INK, 3);
    y += 21 + 16;

    y = section_title(&mut fb, y, "Featured Users");
    for i in 0..10 {
        let cx = PADDING + 4 + 30 + i * (60 + 8);
        fill_circle(&mut fb, cx, y + 30, 30, 0x00D3D3D3);
        fill_circle(&mut fb, cx, y + 30, 22, AVATAR_COLORS[i as usize % AVATAR_COLORS.len()]);
    }
    y += 60 + 16;

    y = section_title(&mut fb, y, "Informational Cards");
    for n in 1..=3 {
        y += 8;
        let card_h = 16 + 150 + 8 + 14 + 6 + 3 * 10 + 16;
        fill_round_rect(&mut fb, PADDING + 2, y + 3, inner, card_h, 12, SHADOW);
        fill_round_rect(&mut fb, PADDING, y, inner, card_h, 12, CARD);

        let mut cy = y + 16;
        grid(&mut fb, PADDING + 16, cy, inner - 32, 150, 0x00808080, 0x00A0A0A0);
        cy += 150 + 8;
        draw_text_scaled(&mut fb, PADDING + 16, cy, &format!("Card Title {n}"), INK, 2);
        cy += 14 + 6;
        let desc = format!(
            "This is some descriptive text for card number {n}. \
             It can be a bit longer to see how it wraps within the card."
        );
        for line in wrap(&desc, ((inner - 32) / 6) as usize).iter().take(3) {
            draw_text_scaled(&mut fb, PADDING + 16, cy, line, MUTED, 1);
            cy += 10;
        }
        y += card_h + 8;
        if y > height as i32 {
            return fb;
        }
    }
    y += 16;

    y = section_title(&mut fb, y, "Detailed Information");
    for line in wrap(LOREM, (inner / 6) as usize) {
        draw_text_scaled(&mut fb, PADDING, y, &line, INK, 1);
        y += 10;
    }
    y += 16;

    y = section_title(&mut fb, y, "Another Image Section");
    grid(&mut fb, PADDING, y, inner, 200, 0x003DDC84, 0x00073042);

    fb
}

fn section_title(fb: &mut FrameBuffer, y: i32, title: &str) -> i32 {
    draw_text_scaled(fb, PADDING, y, title, INK, 2);
    y + 14 + 8
}

/// A `w`x`h` block of `bg` crossed by 1-px `line`s every 16 px.
fn grid(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, bg: u32, line: u32) {
    fill_rect(fb, x, y, w, h, bg);
    for gx in (0..w).step_by(16) {
        fill_rect(fb, x + gx, y, 1, h, line);
    }
    for gy in (0..h).step_by(16) {
        fill_rect(fb, x, y + gy, w, 1, line);
    }
}

/// Greedy word wrap to at most `max_chars` per line. Longer words get their own line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(wrap("", 10).is_empty());
        assert_eq!(wrap("unbreakableword", 4), vec!["unbreakableword"]);
    }

    #[test]
    fn demo_screen_is_deterministic_and_not_blank() {
        let a = demo_screen(360, 480);
        let b = demo_screen(360, 480);
        assert_eq!(a, b);
        assert_eq!(a.pixels.len(), 360 * 480);
        assert!(a.pixels.iter().any(|&p| p != BACKGROUND));
    }

    #[test]
    fn tiny_and_tall_screens_render() {
        let tiny = demo_screen(8, 8);
        assert_eq!(tiny.pixels.len(), 64);
        // The bottom picture lands around y = 1100..1300 at this width.
        let tall = demo_screen(320, 1600);
        assert!(tall.pixels[1150 * 320..1200 * 320].iter().any(|&p| p != BACKGROUND));
    }
}
