use column_flow::layout::{break_columns, BreakResult, ColumnFlow, ColumnParams, Padding};
use column_flow::{Diagnostic, MonospaceWrapper, Px, TextMeasurement, TextWrapper, WrappedText};

fn prose() -> String {
    format!(
        "{}\n\n{}\n\n{}",
        lipsum::lipsum(120),
        lipsum::lipsum(200),
        lipsum::lipsum(80)
    )
}

fn wrapper() -> MonospaceWrapper {
    MonospaceWrapper::new(Px(10), Px(20))
}

fn break_prose(text: &str, viewport_width: i32) -> (WrappedText, BreakResult, Vec<Diagnostic>) {
    let wrapped = wrapper().wrap(text, Px(200));
    let params = ColumnParams::new(Px(200), Px(20)).with_viewport(Px(viewport_width), Px(200));
    let mut seen = Vec::new();
    let result = break_columns(&wrapped, &params, &mut |d: &Diagnostic| seen.push(d.clone()))
        .expect("valid parameters");
    (wrapped, result, seen)
}

#[test]
fn wide_viewport_places_all_text() {
    let text = prose();
    let (wrapped, result, seen) = break_prose(&text, 100_000);

    assert!(seen.is_empty());
    assert_eq!(result.overflow_start, None);
    assert!(result.segments.len() > 3);

    let first = result.segments.first().unwrap();
    let last = result.segments.last().unwrap();
    assert_eq!(first.start, 0);
    assert_eq!(last.end, text.len());

    for pair in result.segments.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        assert!(prev.start < next.start, "starts must increase");
        assert!(next.start < prev.end, "no gaps between columns");

        // neighbours share exactly the previous column's last line
        let shared = wrapped
            .lines()
            .iter()
            .find(|line| line.end == prev.end)
            .expect("segments end on line boundaries");
        assert_eq!(shared.start, next.start);
    }
}

#[test]
fn columns_stay_within_the_viewport_height() {
    let text = prose();
    let (wrapped, result, _) = break_prose(&text, 100_000);

    for segment in &result.segments {
        let lines: Vec<_> = wrapped
            .lines()
            .iter()
            .filter(|line| line.start >= segment.start && line.end <= segment.end)
            .collect();
        let top = lines.first().unwrap().top;
        let bottom = lines.last().unwrap().bottom;
        assert!(bottom - top < Px(200));
    }
}

#[test]
fn narrow_viewport_overflows_after_the_last_column() {
    let text = prose();
    // room for the first column plus two more: 0, 200 and 400 are all < 480
    let (_, result, _) = break_prose(&text, 700);

    assert_eq!(result.segments.len(), 3);
    assert_eq!(
        result.overflow_start,
        Some(result.segments.last().unwrap().end)
    );
}

#[test]
fn breaking_is_deterministic() {
    let text = prose();
    let (_, a, seen_a) = break_prose(&text, 1500);
    let (_, b, seen_b) = break_prose(&text, 1500);
    assert_eq!(a, b);
    assert_eq!(seen_a, seen_b);
}

#[test]
fn measurements_from_an_external_shaper() {
    // ten 20px lines of ten bytes each, as another shaper might report them
    let lines = (0..10)
        .map(|i| column_flow::LineMetrics {
            top: Px(i * 20),
            bottom: Px(i * 20 + 20),
            start: i as usize * 10,
            end: i as usize * 10 + 10,
        })
        .collect();
    let wrapped = WrappedText::from_lines(lines);
    assert_eq!(wrapped.line_count(), 10);

    let params = ColumnParams::new(Px(200), Px(20)).with_viewport(Px(500), Px(100));
    let result = break_columns(&wrapped, &params, &mut column_flow::NullSink).unwrap();

    let ranges: Vec<_> = result.segments.iter().map(|s| s.range()).collect();
    assert_eq!(ranges, vec![0..40, 30..70]);
    assert_eq!(result.overflow_start, Some(70));
}

#[test]
fn overflow_continues_in_the_next_view() {
    let text = prose();
    let mut pages = Vec::new();
    let mut remaining = text.clone();

    while !remaining.is_empty() {
        let mut flow = ColumnFlow::new(wrapper()).with_diagnostics(|_: &Diagnostic| {});
        flow.set_padding(Padding::symmetric(Px(10), Px(20)));
        flow.set_size(Px(700), Px(220));
        flow.set_text(remaining.clone());

        let columns = flow.layout().unwrap().columns.len();
        assert!(columns >= 1);
        pages.push(columns);

        let overflow = flow.overflow().unwrap().to_string();
        assert!(overflow.len() < remaining.len(), "every view makes progress");
        remaining = overflow;
    }

    assert!(pages.len() > 1);
}
