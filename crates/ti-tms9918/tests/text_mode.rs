//! Text-mode tile rendering through the public chip interface.

use ti_tms9918::{Color, DisplayMode, ScanlineError, Tms9918, SCANLINE_WIDTH};

const BG: u8 = Color::Black as u8;
const FG: u8 = Color::White as u8;

#[rustfmt::skip]
const PATTERNS: [u8; 64] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // all background
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // all foreground
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, // only the hidden 2 pixels set
    0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, // all visible pixels set
    0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, // vertical stripes
    0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, // horizontal stripes
    0x38, 0x44, 0x5C, 0x54, 0x5C, 0x40, 0x38, 0x00, // '@'
    0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, // 'T'
];

#[rustfmt::skip]
const FIRST_ROW: [u8; 48] = [
    BG, BG, BG, BG, BG, BG,
    FG, FG, FG, FG, FG, FG,
    BG, BG, BG, BG, BG, BG,
    FG, FG, FG, FG, FG, FG,
    FG, BG, FG, BG, FG, BG,
    BG, BG, BG, BG, BG, BG,
    BG, BG, FG, FG, FG, BG,
    BG, FG, FG, FG, FG, FG,
];

/// Chip in text mode, white on black, names 0-39 on the first row and
/// the eight patterns repeated to cover them.
fn text_mode_vdp() -> Tms9918 {
    let mut vdp = Tms9918::new();

    vdp.set_register(0, 0x00);
    vdp.set_register(1, 0xD0);
    vdp.set_register(2, 0x05); // 0x1400
    vdp.set_register(3, 0x80); // 0x2000
    vdp.set_register(4, 0x01); // 0x0800
    vdp.set_register(5, 0x20); // 0x1000
    vdp.set_register(6, 0x00); // 0x0000
    vdp.set_register(7, 0xF1); // white on black

    vdp.set_vram_address(0x1400);
    for name in 0..40 {
        vdp.write_data(name);
    }

    vdp.set_vram_address(0x0800);
    for _ in 0..5 {
        for &pattern in &PATTERNS {
            vdp.write_data(pattern);
        }
    }

    vdp
}

fn expected_line(cells: &[u8]) -> Vec<u8> {
    let mut line = vec![BG; 8];
    for _ in 0..5 {
        line.extend_from_slice(cells);
    }
    line.extend_from_slice(&[BG; 8]);
    line
}

#[test]
fn tiles() {
    let vdp = text_mode_vdp();
    assert_eq!(vdp.registers().display_mode(), DisplayMode::Text);

    let scanline = vdp.scanline(0).unwrap();
    assert_eq!(scanline.len(), SCANLINE_WIDTH);
    assert_eq!(scanline.to_vec(), expected_line(&FIRST_ROW));
}

#[test]
fn every_pixel_row_of_the_first_text_row() {
    let vdp = text_mode_vdp();
    for y in 0..8u16 {
        let cells: Vec<u8> = (0..8)
            .flat_map(|tile| {
                let pattern = PATTERNS[tile * 8 + usize::from(y)];
                (0..6).map(move |bit| if pattern & (0x80 >> bit) != 0 { FG } else { BG })
            })
            .collect();
        assert_eq!(vdp.scanline(y).unwrap().to_vec(), expected_line(&cells), "line {y}");
    }
}

#[test]
fn borders_use_backdrop_colour() {
    let mut vdp = text_mode_vdp();
    vdp.set_register(7, 0x4A);
    let line = vdp.scanline(3).unwrap();
    assert!(line[..8].iter().all(|&p| p == 0x0A));
    assert!(line[248..].iter().all(|&p| p == 0x0A));
}

#[test]
fn rendering_does_not_disturb_port_state() {
    let mut vdp = text_mode_vdp();
    vdp.write_control(0x00);
    vdp.write_control(0x14);
    let address = vdp.vram_address();
    let buffered = vdp.read_ahead();

    vdp.scanline(100).unwrap();

    assert_eq!(vdp.vram_address(), address);
    assert_eq!(vdp.read_ahead(), buffered);
    assert_eq!(vdp.read_data(), 0);
}

#[test]
fn lines_past_active_display_are_rejected() {
    let vdp = text_mode_vdp();
    for line in [192u16, 200, 255, 1000] {
        assert_eq!(
            vdp.scanline(line),
            Err(ScanlineError::LineOutOfRange {
                line,
                active_lines: 192
            })
        );
    }
}
