// src/gui/plot.rs
//
// Scatter of average QBR per temperature bucket. One point per bucket,
// marker area proportional to the game count, hover shows the count.

use eframe::egui;
use egui_plot::{Plot, Points};

use crate::db::BucketRow;

/// Marker area grows linearly with the game count, so the radius is the
/// square root of the scaled count. Strictly increasing in `games`.
pub fn marker_radius(games: i64) -> f32 {
    ((games.max(0) as f32) * 10.0 / std::f32::consts::PI).sqrt()
}

/// Tick label for a bucket floor: 30 → "30-40".
pub fn bucket_label(bucket: i64) -> String {
    format!("{}-{}", bucket, bucket + 10)
}

pub fn draw(ui: &mut egui::Ui, title: &str, rows: &[BucketRow]) {
    ui.heading(title);

    let plot = Plot::new("qbr_by_temp_bucket")
        .x_axis_label("Temperature Range (°F)")
        .y_axis_label("QBR Total")
        // QBR is scaled 0..100
        .include_y(0.0)
        .include_y(100.0)
        .x_axis_formatter(|mark, _range| {
            let v = mark.value;
            if v.fract() == 0.0 && (v as i64) % 10 == 0 {
                bucket_label(v as i64)
            } else {
                s!()
            }
        })
        .label_formatter(|name, value| {
            if name.is_empty() {
                s!()
            } else {
                format!("{}\nQBR {:.2}", name, value.y)
            }
        });

    plot.show(ui, |plot_ui| {
        for row in rows {
            let point = Points::new(
                format!("Games: {}", row.games),
                vec![[row.bucket as f64, row.avg_qbr]],
            )
            .radius(marker_radius(row.games))
            .filled(true);
            plot_ui.points(point);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_radius_strictly_increases_with_count() {
        let radii: Vec<f32> = (1..50).map(marker_radius).collect();
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bucket_labels_are_range_strings() {
        assert_eq!(bucket_label(30), "30-40");
        assert_eq!(bucket_label(0), "0-10");
        assert_eq!(bucket_label(-10), "-10-0");
    }
}
