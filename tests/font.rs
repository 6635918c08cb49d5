use column_flow::{Font, FontWrapper, Px, TextMeasurement, TextWrapper, WrappedText};

// DejaVu Sans Mono: 2048 units per em, every glyph 1233 units wide
const DEJAVU_MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

fn font() -> Font {
    Font::load(DEJAVU_MONO.to_vec()).expect("can load font")
}

fn ranges(wrapped: &WrappedText) -> Vec<std::ops::Range<usize>> {
    wrapped.lines().iter().map(|l| l.range()).collect()
}

#[test]
fn metrics_at_one_unit_per_pixel() {
    let font = font();
    assert_eq!(font.ascent(2048.0), 1901.0);
    assert_eq!(font.descent(2048.0), -483.0);
    assert_eq!(font.leading(2048.0), 0.0);
    assert_eq!(font.line_height(2048.0), 2384.0);
    assert_eq!(font.advance('A', 2048.0), 1233.0);
    assert_eq!(font.advance('A', 1024.0), 616.5);
}

#[test]
fn missing_characters_measure_as_the_replacement_glyph() {
    let font = font();
    assert_eq!(font.glyph_id('?'), Some(34));
    assert_eq!(font.replacement_glyph_id(), Some(3261));
    assert_eq!(font.glyph_id('\u{4E00}'), None);
    assert_eq!(
        font.advance('\u{4E00}', 2048.0),
        font.advance('\u{FFFD}', 2048.0)
    );
}

#[test]
fn wrapper_line_height_rounds_up() {
    // 23.84px
    let wrapper = FontWrapper::new(font(), 20.48);
    assert_eq!(wrapper.line_height(), Px(24));
}

#[test]
fn wraps_words_with_font_advances() {
    // every character is 12px at this size
    let wrapper = FontWrapper::new(font(), 20.48);
    let wrapped = wrapper.wrap("hello world foo", Px(132));

    assert_eq!(ranges(&wrapped), vec![0..12, 12..15]);
    assert_eq!(wrapped.line_top(1), Px(24));
    assert_eq!(wrapped.height(), Px(48));
}

#[test]
fn tabs_are_four_spaces_wide() {
    // 49px of tab and a 12px letter fill the line exactly
    let wrapper = FontWrapper::new(font(), 20.48);
    let wrapped = wrapper.wrap("\tab", Px(61));
    assert_eq!(ranges(&wrapped), vec![0..1, 1..3]);
}

#[test]
fn missing_glyphs_still_take_up_room() {
    let wrapper = FontWrapper::new(font(), 20.48);
    let wrapped = wrapper.wrap("\u{4E00}\u{4E00}\u{4E00}", Px(30));
    assert_eq!(ranges(&wrapped), vec![0..6, 6..9]);
}
