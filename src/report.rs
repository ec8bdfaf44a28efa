use crate::errors::AppError;
use crate::models::{Reading, Stats};
use crate::status;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use printpdf::path::PaintMode;
use printpdf::*;
use std::io::BufWriter;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_RIGHT: f32 = 196.0;
const BOTTOM_MARGIN: f32 = 20.0;

const HEADER_BAND_H: f32 = 40.0;
const CARD_W: f32 = 60.0;
const CARD_H: f32 = 25.0;
const CARD_GAP: f32 = 5.0;

const TABLE_TOP: f32 = 202.0;
const CONTINUED_TOP: f32 = 277.0;
const HEADER_ROW_H: f32 = 8.0;
const ROW_H: f32 = 7.0;

const COL_X: [f32; 5] = [14.0, 55.0, 85.0, 130.0, 165.0];
const COL_TITLES: [&str; 5] = ["Date", "Time", "Type", "Level", "Status"];

const COLOR_HEADER_BLUE: (u8, u8, u8) = (14, 165, 233);
const COLOR_WHITE: (u8, u8, u8) = (255, 255, 255);
const COLOR_TITLE_GRAY: (u8, u8, u8) = (60, 60, 60);
const COLOR_LABEL_GRAY: (u8, u8, u8) = (100, 116, 139);
const COLOR_VALUE_DARK: (u8, u8, u8) = (15, 23, 42);
const COLOR_VALUE_GREEN: (u8, u8, u8) = (22, 163, 74);
const COLOR_VALUE_RED: (u8, u8, u8) = (220, 38, 38);
const COLOR_CARD_FILL: (u8, u8, u8) = (241, 245, 249);
const COLOR_CARD_BORDER: (u8, u8, u8) = (203, 213, 225);
const COLOR_ROW_ALT: (u8, u8, u8) = (248, 250, 252);
const COLOR_ROW_LINE: (u8, u8, u8) = (226, 232, 240);
const COLOR_BODY_TEXT: (u8, u8, u8) = (51, 65, 85);

fn rgb(color: (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        None,
    ))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb(color));
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn add_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32, color: (u8, u8, u8)) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.3);
    let line = Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn fill_rect(
    layer: &PdfLayerReference,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    fill: (u8, u8, u8),
    border: Option<(u8, u8, u8)>,
) {
    layer.set_fill_color(rgb(fill));
    let mode = match border {
        Some(color) => {
            layer.set_outline_color(rgb(color));
            layer.set_outline_thickness(0.5);
            PaintMode::FillStroke
        }
        None => PaintMode::Fill,
    };
    layer.add_rect(Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)).with_mode(mode));
}

fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

fn format_display_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

fn draw_stat_card(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    x: f32,
    label: &str,
    value: u32,
    value_color: (u8, u8, u8),
) {
    let top = 237.0;
    fill_rect(
        layer,
        x,
        top - CARD_H,
        x + CARD_W,
        top,
        COLOR_CARD_FILL,
        Some(COLOR_CARD_BORDER),
    );
    add_text(layer, font, label, x + 6.0, top - 8.0, 10.0, COLOR_LABEL_GRAY);
    add_text(
        layer,
        font_bold,
        &format!("{value} mg/dL"),
        x + 6.0,
        top - 20.0,
        16.0,
        value_color,
    );
}

fn draw_table_header(layer: &PdfLayerReference, font_bold: &IndirectFontRef, top: f32) {
    fill_rect(
        layer,
        MARGIN_LEFT,
        top - HEADER_ROW_H,
        MARGIN_RIGHT,
        top,
        COLOR_HEADER_BLUE,
        None,
    );
    for (title, x) in COL_TITLES.iter().zip(COL_X) {
        add_text(
            layer,
            font_bold,
            title,
            x + 2.0,
            top - HEADER_ROW_H + 2.5,
            10.0,
            COLOR_WHITE,
        );
    }
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    reading: &Reading,
    index: usize,
    top: f32,
) {
    if index % 2 == 1 {
        fill_rect(
            layer,
            MARGIN_LEFT,
            top - ROW_H,
            MARGIN_RIGHT,
            top,
            COLOR_ROW_ALT,
            None,
        );
    }

    let status = status::classify(reading.value, reading.reading_type);
    let cells = [
        format_display_date(&reading.date),
        format_display_time(&reading.time),
        reading.reading_type.as_str().to_string(),
        format!("{} mg/dL", reading.value),
        status.as_str().to_string(),
    ];
    let baseline = top - ROW_H + 2.0;
    for (i, (cell, x)) in cells.iter().zip(COL_X).enumerate() {
        let cell_font = if i == 3 { font_bold } else { font };
        add_text(layer, cell_font, cell, x + 2.0, baseline, 9.0, COLOR_BODY_TEXT);
    }
    add_line(
        layer,
        MARGIN_LEFT,
        top - ROW_H,
        MARGIN_RIGHT,
        top - ROW_H,
        COLOR_ROW_LINE,
    );
}

pub fn render_report(
    readings: &[Reading],
    stats: Stats,
    range_label: &str,
    generated_at: DateTime<Local>,
) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new("Glucose Report", Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(AppError::internal)?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(AppError::internal)?;
    let mut layer = doc.get_page(page).get_layer(layer);

    fill_rect(
        &layer,
        0.0,
        PAGE_H - HEADER_BAND_H,
        PAGE_W,
        PAGE_H,
        COLOR_HEADER_BLUE,
        None,
    );
    add_text(
        &layer,
        &font_bold,
        "Glucose Report",
        MARGIN_LEFT,
        PAGE_H - 20.0,
        22.0,
        COLOR_WHITE,
    );
    add_text(
        &layer,
        &font,
        &format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M")),
        MARGIN_LEFT,
        PAGE_H - 30.0,
        10.0,
        COLOR_WHITE,
    );
    add_text(
        &layer,
        &font,
        &format!("Filter: {range_label}"),
        MARGIN_LEFT,
        PAGE_H - 35.0,
        10.0,
        COLOR_WHITE,
    );

    add_text(
        &layer,
        &font_bold,
        "Summary Statistics",
        MARGIN_LEFT,
        PAGE_H - 50.0,
        14.0,
        COLOR_TITLE_GRAY,
    );
    draw_stat_card(
        &layer,
        &font,
        &font_bold,
        MARGIN_LEFT,
        "Average",
        stats.avg,
        COLOR_VALUE_DARK,
    );
    draw_stat_card(
        &layer,
        &font,
        &font_bold,
        MARGIN_LEFT + CARD_W + CARD_GAP,
        "Lowest",
        stats.min,
        COLOR_VALUE_GREEN,
    );
    draw_stat_card(
        &layer,
        &font,
        &font_bold,
        MARGIN_LEFT + (CARD_W + CARD_GAP) * 2.0,
        "Highest",
        stats.max,
        COLOR_VALUE_RED,
    );

    let mut top = TABLE_TOP;
    draw_table_header(&layer, &font_bold, top);
    top -= HEADER_ROW_H;

    if readings.is_empty() {
        add_text(
            &layer,
            &font,
            "No readings in the selected range.",
            MARGIN_LEFT + 2.0,
            top - 6.0,
            10.0,
            COLOR_LABEL_GRAY,
        );
    }

    for (index, reading) in readings.iter().enumerate() {
        if top - ROW_H < BOTTOM_MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Readings");
            layer = doc.get_page(next_page).get_layer(next_layer);
            top = CONTINUED_TOP;
            draw_table_header(&layer, &font_bold, top);
            top -= HEADER_ROW_H;
        }
        draw_row(&layer, &font, &font_bold, reading, index, top);
        top -= ROW_H;
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(AppError::internal)?;
    let bytes = writer.into_inner().map_err(AppError::internal)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadingType;
    use crate::stats::compute_stats;
    use chrono::TimeZone;

    fn reading(id: &str, value: u32) -> Reading {
        Reading {
            id: id.to_string(),
            date: "2024-05-20".to_string(),
            time: "08:00".to_string(),
            value,
            reading_type: ReadingType::Fasting,
            timestamp: 1_716_180_000_000,
        }
    }

    fn generated_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 20, 14, 30, 0).unwrap()
    }

    #[test]
    fn report_bytes_are_a_pdf_document() {
        let readings = vec![reading("a", 95), reading("b", 182)];
        let stats = compute_stats(&readings);
        let bytes = render_report(&readings, stats, "Last Week", generated_at()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn empty_report_still_renders() {
        let bytes = render_report(&[], Stats::empty(), "Last 3 Days", generated_at()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_report_spills_onto_more_pages() {
        let readings: Vec<Reading> = (0..80)
            .map(|i| reading(&format!("r{i}"), 80 + (i % 60) as u32))
            .collect();
        let stats = compute_stats(&readings);
        let long = render_report(&readings, stats, "Last Month", generated_at()).unwrap();

        let short =
            render_report(&readings[..2], compute_stats(&readings[..2]), "Last Month", generated_at())
                .unwrap();
        assert!(long.starts_with(b"%PDF"));
        assert!(long.len() > short.len());
    }

    #[test]
    fn display_formats_match_the_ui() {
        assert_eq!(format_display_date("2024-05-20"), "May 20, 2024");
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
        assert_eq!(format_display_time("08:05"), "8:05 AM");
        assert_eq!(format_display_time("14:30"), "2:30 PM");
        assert_eq!(format_display_time("00:15"), "12:15 AM");
        assert_eq!(format_display_time("garbage"), "garbage");
    }
}
