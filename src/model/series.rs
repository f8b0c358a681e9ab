// src/model/series.rs

use serde::{Deserialize, Serialize};

use crate::error::{InviError, Result};

/// Day markers shared by every manual series.
pub const SERIES_DAYS: [u32; 3] = [0, 75, 150];

pub const MAX_BACKORDERS: u32 = 50;
pub const MAX_INVENTORY_LEVEL: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Backorders,
    InventoryPosition,
    OnHandInventory,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [
        SeriesKind::Backorders,
        SeriesKind::InventoryPosition,
        SeriesKind::OnHandInventory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Backorders => "Backorders",
            SeriesKind::InventoryPosition => "Inventory Position",
            SeriesKind::OnHandInventory => "On-Hand Inventory",
        }
    }

    fn max_value(self) -> u32 {
        match self {
            SeriesKind::Backorders => MAX_BACKORDERS,
            SeriesKind::InventoryPosition | SeriesKind::OnHandInventory => MAX_INVENTORY_LEVEL,
        }
    }
}

/// Hand-entered inventory levels for the "Inventory Levels Over Time" plot.
///
/// Opaque to the calculator: it is only validated at the input surface and
/// carried through to the renderer next to the reorder point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventorySeries {
    pub backorders: [u32; 3],
    pub inventory_position: [u32; 3],
    pub on_hand: [u32; 3],
}

impl Default for InventorySeries {
    fn default() -> Self {
        Self {
            backorders: [0, 10, 0],
            inventory_position: [140, 80, 150],
            on_hand: [121, 60, 140],
        }
    }
}

impl InventorySeries {
    pub fn values(&self, kind: SeriesKind) -> &[u32; 3] {
        match kind {
            SeriesKind::Backorders => &self.backorders,
            SeriesKind::InventoryPosition => &self.inventory_position,
            SeriesKind::OnHandInventory => &self.on_hand,
        }
    }

    pub fn values_mut(&mut self, kind: SeriesKind) -> &mut [u32; 3] {
        match kind {
            SeriesKind::Backorders => &mut self.backorders,
            SeriesKind::InventoryPosition => &mut self.inventory_position,
            SeriesKind::OnHandInventory => &mut self.on_hand,
        }
    }

    /// Widget ranges: backorders 0..=50, the two inventory series 0..=300.
    pub fn validate(&self) -> Result<()> {
        for kind in SeriesKind::ALL {
            let max = kind.max_value();
            for (index, &value) in self.values(kind).iter().enumerate() {
                if value > max {
                    return Err(InviError::InvalidSeries {
                        series: kind.label(),
                        index,
                        value,
                        expected: if max == MAX_BACKORDERS {
                            "0..=50"
                        } else {
                            "0..=300"
                        },
                    });
                }
            }
        }
        Ok(())
    }
}

/// One row of the tidy (day, series, value) table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelPoint {
    pub day: u32,
    pub series: &'static str,
    pub value: u32,
}

/// Dashed horizontal marker drawn at the reorder point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderAnnotation {
    pub value: f64,
    pub label: String,
    /// X position of the label, a few days right of the first marker.
    pub label_day: u32,
}

/// Data for chart 7: the manual series plus the live reorder point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryLevelsChart {
    pub points: Vec<LevelPoint>,
    pub reorder_point: ReorderAnnotation,
}

impl InventoryLevelsChart {
    pub fn new(series: &InventorySeries, reorder_point: f64) -> Self {
        let points = SeriesKind::ALL
            .iter()
            .flat_map(move |&kind| {
                SERIES_DAYS
                    .iter()
                    .zip(series.values(kind))
                    .map(move |(&day, &value)| LevelPoint {
                        day,
                        series: kind.label(),
                        value,
                    })
            })
            .collect();

        Self {
            points,
            reorder_point: ReorderAnnotation {
                value: reorder_point,
                label: format!("Reorder Point (r={:.0})", reorder_point),
                label_day: SERIES_DAYS[0] + 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_within_widget_ranges() {
        assert!(InventorySeries::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_backorders_above_fifty() {
        let mut series = InventorySeries::default();
        series.backorders[1] = 51;
        match series.validate() {
            Err(InviError::InvalidSeries {
                series, index, value, ..
            }) => {
                assert_eq!(series, "Backorders");
                assert_eq!(index, 1);
                assert_eq!(value, 51);
            }
            other => panic!("expected InvalidSeries, got {:?}", other),
        }
    }

    #[test]
    fn test_inventory_levels_allow_up_to_three_hundred() {
        let mut series = InventorySeries::default();
        series.on_hand = [300, 300, 300];
        assert!(series.validate().is_ok());
        series.values_mut(SeriesKind::InventoryPosition)[2] = 301;
        assert!(series.validate().is_err());
    }

    #[test]
    fn test_chart_is_tidy_and_annotated() {
        let chart = InventoryLevelsChart::new(&InventorySeries::default(), 152.73);

        assert_eq!(chart.points.len(), 9);
        assert_eq!(
            chart.points[0],
            LevelPoint {
                day: 0,
                series: "Backorders",
                value: 0
            }
        );
        assert_eq!(chart.points[4].series, "Inventory Position");
        assert_eq!(chart.points[4].day, 75);
        assert_eq!(chart.points[4].value, 80);
        assert_eq!(chart.points[8].series, "On-Hand Inventory");
        assert_eq!(chart.points[8].value, 140);

        assert_eq!(chart.reorder_point.label, "Reorder Point (r=153)");
        assert_eq!(chart.reorder_point.label_day, 5);
    }
}
