use column_flow::layout::ColumnFlow;
use column_flow::{Diagnostic, MonospaceWrapper, Px};

// one terminal cell is 10px wide and 10px tall
const CELL: i32 = 10;

fn main() {
    let wrapper = MonospaceWrapper::new(Px(CELL), Px(CELL));
    let mut flow =
        ColumnFlow::new(wrapper).with_diagnostics(|d: &Diagnostic| eprintln!("warning: {d}"));
    flow.set_column_width(Px(280));
    flow.set_spacing(Px(40));
    flow.set_size(Px(1000), Px(160));
    flow.set_text(format!("{}\n\n{}", lipsum::lipsum(60), lipsum::lipsum(240)));

    let text = flow.text().to_string();
    let width = (flow.column_width().0 / CELL) as usize;
    let gap = " ".repeat((flow.spacing().0 / CELL) as usize);

    let layout = flow.layout().expect("can lay out columns");
    let columns = layout.columns.len();
    let rows = layout
        .columns
        .iter()
        .map(|c| c.lines.lines().len())
        .max()
        .unwrap_or(0);

    for row in 0..rows {
        let cells: Vec<String> = layout
            .columns
            .iter()
            .map(|column| {
                let line = column
                    .lines
                    .lines()
                    .get(row)
                    .map(|l| text[l.range()].trim_end())
                    .unwrap_or("");
                format!("{line:<width$}")
            })
            .collect();
        println!("{}", cells.join(&gap));
    }

    let overflow = flow.overflow().expect("can lay out columns");
    println!();
    println!("{columns} columns, {} bytes left over", overflow.len());
}
