use super::*;
use crate::api::models::UserProfile;

fn profile(discriminator: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": "1",
        "username": "a",
        "discriminator": discriminator
    }))
    .unwrap()
}

#[test]
fn hex_round_trip() {
    for s in ["#000000", "#ffffff", "#5865f2", "#0000ff", "#0a0b0c"] {
        assert_eq!(num_to_hex(hex_to_num(s).unwrap()), s);
    }
}

#[test]
fn num_to_hex_pads_and_masks() {
    assert_eq!(num_to_hex(0xff), "#0000ff");
    assert_eq!(num_to_hex(0xab00_ff00), "#00ff00");
}

#[test]
fn hex_to_num_rejects_bad_input() {
    assert_eq!(hex_to_num("5865f2"), Some(0x5865f2));
    assert_eq!(hex_to_num("#fff"), None);
    assert_eq!(hex_to_num("#gggggg"), None);
    assert_eq!(hex_to_num("#+12345"), None);
}

#[test]
fn default_color_by_discriminator() {
    assert_eq!(default_display_color(&profile("3")), "#faa61a");
    assert_eq!(default_display_color(&profile("0009")), DEFAULT_AVATAR_COLORS[3]);
    assert_eq!(default_display_color(&profile("0")), DEFAULT_AVATAR_COLORS[0]);
    assert_eq!(default_display_color(&profile("")), DEFAULT_AVATAR_COLORS[0]);
}

#[test]
fn padding_reaches_next_multiple_of_four() {
    assert_eq!(pad_to_alignment(vec![]), Vec::<u8>::new());
    assert_eq!(pad_to_alignment(vec![1, 2, 3, 4]), vec![1, 2, 3, 4]);
    assert_eq!(pad_to_alignment(vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5, 0, 0, 0]);
    assert_eq!(pad_to_alignment(vec![9; 7]).len(), 8);
}

#[test]
fn dominant_color_of_raw_bytes() {
    // PNG signature plus a short tail; no decoding happens, the bytes are the "pixels".
    let bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    let color = dominant_color(bytes, &MedianCut);
    // Two samples: (0x89,'P','N') and (0x0d,0x0a,0) after zero padding.
    assert_eq!(color, "#4b2d27");
}

#[test]
fn dominant_color_of_nothing_is_black() {
    assert_eq!(dominant_color(Vec::new(), &MedianCut), FETCH_FAILED_COLOR);
}

#[test]
fn quantizer_ranks_by_prevalence() {
    let mut pixels = [200u8, 10, 10, 255].repeat(3);
    pixels.extend([10u8, 10, 200, 255].repeat(5));

    let palette = MedianCut.quantize(&pixels, 2);
    assert_eq!(
        palette,
        vec![
            PaletteEntry { red: 10, green: 10, blue: 200 },
            PaletteEntry { red: 200, green: 10, blue: 10 },
        ]
    );
}

#[test]
fn quantizer_respects_count() {
    let pixels: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v, 255]).collect();
    assert_eq!(MedianCut.quantize(&pixels, 5).len(), 5);
    assert!(MedianCut.quantize(&pixels, 0).is_empty());

    let solid = [7u8, 7, 7, 0].repeat(10);
    assert_eq!(
        MedianCut.quantize(&solid, 4),
        vec![PaletteEntry { red: 7, green: 7, blue: 7 }]
    );
}

#[test]
fn palette_entry_hex() {
    let entry = PaletteEntry { red: 1, green: 0xab, blue: 0 };
    assert_eq!(entry.to_hex(), "#01ab00");
}
