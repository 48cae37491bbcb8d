#[derive(Debug, Clone, PartialEq)]
pub struct LinePlacement {
    pub content: String,
    pub center_x: f32,
    pub center_y: f32,
}

/// Splits `text` on `\n` (dropping a trailing `\r` per line) and centers
/// the lines as one block around the canvas midpoint, `line_height` apart.
/// Empty text still yields one line.
pub fn layout_lines(
    text: &str,
    canvas_width: u32,
    canvas_height: u32,
    line_height: f32,
) -> Vec<LinePlacement> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let line_count = lines.len() as f32;

    let center_x = canvas_width as f32 / 2.0;
    let first_line_y = canvas_height as f32 / 2.0 - (line_count - 1.0) * (line_height / 2.0);

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| LinePlacement {
            content: line.to_string(),
            center_x,
            center_y: first_line_y + index as f32 * line_height,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_sits_on_canvas_center() {
        let placements = layout_lines("we're so back", 600, 400, 40.0);

        assert_eq!(
            placements,
            vec![LinePlacement {
                content: "we're so back".to_string(),
                center_x: 300.0,
                center_y: 200.0,
            }]
        );
    }

    #[test]
    fn test_three_lines_are_spread_around_center() {
        let placements = layout_lines("line1\nline2\nline3", 600, 400, 40.0);

        let rows: Vec<(&str, f32)> = placements
            .iter()
            .map(|p| (p.content.as_str(), p.center_y))
            .collect();
        assert_eq!(rows, vec![("line1", 160.0), ("line2", 200.0), ("line3", 240.0)]);
    }

    #[test]
    fn test_even_line_count_straddles_center() {
        let placements = layout_lines("top\nbottom", 600, 400, 40.0);

        assert_eq!(placements[0].center_y, 180.0);
        assert_eq!(placements[1].center_y, 220.0);
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        let placements = layout_lines("", 600, 400, 40.0);

        assert_eq!(placements.len(), 1);
        assert!(placements[0].content.is_empty());
        assert_eq!(placements[0].center_y, 200.0);
    }

    #[test]
    fn test_trailing_newline_adds_an_empty_last_line() {
        let placements = layout_lines("hello\n", 600, 400, 40.0);

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[1].content, "");
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let placements = layout_lines("a\r\nb", 600, 400, 40.0);

        let contents: Vec<&str> = placements.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[test]
    fn test_all_lines_are_horizontally_centered() {
        let placements = layout_lines("a\nbb\nccc", 600, 400, 40.0);

        assert!(placements.iter().all(|p| p.center_x == 300.0));
    }
}
