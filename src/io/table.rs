// src/io/table.rs

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::dashboard::charts::{BarChart, ChartSet};
use crate::dashboard::tiles::KpiTile;
use crate::model::series::InventoryLevelsChart;
use crate::policy::curve::TotalCostCurve;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// KPI tiles as a single header/value row, the way the dashboard lays them out.
pub fn render_tiles_table(tiles: &[KpiTile]) -> String {
    let mut table = new_table();
    table.set_header(tiles.iter().map(|t| t.label).collect::<Vec<_>>());

    let cells: Vec<Cell> = tiles
        .iter()
        .map(|t| {
            let cell = Cell::new(&t.display);
            if t.display.starts_with('-') {
                cell.fg(Color::Red)
            } else {
                cell
            }
        })
        .collect();
    table.add_row(cells);
    table.to_string()
}

pub fn render_bar_chart_table(chart: &BarChart) -> String {
    let mut table = new_table();
    table.set_header(vec![chart.title, "Value"]);
    for bar in &chart.bars {
        table.add_row(vec![bar.label.to_string(), format!("{:.2}", bar.value)]);
    }
    table.to_string()
}

pub fn render_curve_table(curve: &TotalCostCurve) -> String {
    let mut table = new_table();
    table.set_header(vec!["Q", "Total Cost"]);

    let cheapest = curve.minimum().map(|p| p.quantity);
    for point in curve {
        let cost = Cell::new(format!("{:.2}", point.total_cost));
        let cost = if Some(point.quantity) == cheapest {
            cost.fg(Color::Green)
        } else {
            cost
        };
        table.add_row(vec![Cell::new(format!("{:.1}", point.quantity)), cost]);
    }
    table.to_string()
}

pub fn render_levels_table(chart: &InventoryLevelsChart) -> String {
    let mut table = new_table();
    table.set_header(vec!["Day", "Series", "Value"]);
    for point in &chart.points {
        table.add_row(vec![
            point.day.to_string(),
            point.series.to_string(),
            point.value.to_string(),
        ]);
    }
    format!("{table}\n{}", chart.reorder_point.label)
}

/// Charts 1-6 stacked, with the what-if curve in its dashboard slot.
pub fn render_charts(charts: &ChartSet) -> String {
    let [budget, components, runway, efficiency, posture] = charts.bar_charts();
    [
        render_bar_chart_table(budget),
        render_bar_chart_table(components),
        render_bar_chart_table(runway),
        format!("4) What-if: Total Cost vs Q\n{}", render_curve_table(&charts.what_if)),
        render_bar_chart_table(efficiency),
        render_bar_chart_table(posture),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tiles::kpi_row;
    use crate::model::inputs::PolicyInputs;
    use crate::model::series::InventorySeries;
    use crate::policy::calculator::calculate;

    #[test]
    fn test_tiles_table_contains_labels_and_values() {
        let outputs = calculate(&PolicyInputs::default());
        let rendered = render_tiles_table(&kpi_row(&outputs));
        assert!(rendered.contains("EOQ (Q*)"));
        assert!(rendered.contains("+19,065"));
    }

    #[test]
    fn test_charts_render_every_title() {
        let inputs = PolicyInputs::default();
        let outputs = calculate(&inputs);
        let charts = ChartSet::build(&inputs, &outputs, &InventorySeries::default());
        let rendered = render_charts(&charts);

        for title in [
            "1) Budget vs. Inventory Cost",
            "2) Cost components ($/yr)",
            "3) Remaining Budget & Simple Runway",
            "4) What-if: Total Cost vs Q",
            "5) Inventory Efficiency",
            "6) Inventory Posture",
        ] {
            assert!(rendered.contains(title), "missing {title}");
        }
    }

    #[test]
    fn test_levels_table_ends_with_annotation() {
        let chart = InventoryLevelsChart::new(&InventorySeries::default(), 152.73);
        let rendered = render_levels_table(&chart);
        assert!(rendered.contains("On-Hand Inventory"));
        assert!(rendered.ends_with("Reorder Point (r=153)"));
    }
}
