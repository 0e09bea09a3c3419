use crate::caption::{Caption, Position};
use crate::error::FilterError;

/// Presentation defaults applied to every caption. The defaults mirror the
/// tool's original fixed styling; callers may override individual fields.
pub struct Style {
    pub font_file: String,
    pub box_color: String,
    pub box_border: u32,
    pub margin: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_file: "/System/Library/Fonts/Supplemental/Verdana.ttf".to_string(),
            box_color: "black@0.5".to_string(),
            box_border: 5,
            margin: 40,
        }
    }
}

pub fn stages(captions: &[Caption], style: &Style) -> Result<Vec<String>, FilterError> {
    if captions.is_empty() {
        return Err(FilterError::EmptyCaptionList);
    }
    Ok(captions.iter().map(|c| drawtext(c, style)).collect())
}

pub fn expression(captions: &[Caption], style: &Style) -> Result<String, FilterError> {
    Ok(stages(captions, style)?.join(","))
}

fn drawtext(caption: &Caption, style: &Style) -> String {
    // Horizontally centered; the vertical anchor is a fixed offset from the
    // top edge, or from the bottom edge accounting for the text height.
    let anchor = match caption.position {
        Position::Top => format!("x=(w-text_w)/2:y={}", style.margin),
        Position::Bottom => format!("x=(w-text_w)/2:y=h-th-{}", style.margin),
    };
    format!(
        "drawtext=fontfile={}:text='{}':fontcolor={}:fontsize={}:box=1:boxcolor={}:boxborderw={}:{}:enable='between(t,{},{})'",
        style.font_file,
        caption.message,
        caption.color,
        caption.size,
        style.box_color,
        style.box_border,
        anchor,
        caption.start_sec,
        caption.end_sec,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use assert_matches2::assert_matches;

    fn caption(message: &str, color: &str, position: Position, window: (u32, u32)) -> Caption {
        Caption {
            message: message.to_string(),
            color: color.to_string(),
            size: 48,
            position,
            start_sec: window.0,
            end_sec: window.1,
        }
    }

    #[test]
    fn stage_carries_every_caption_field() {
        let caption = caption("Hello, world!", "red", Position::Bottom, (5, 10));

        let stage = drawtext(&caption, &Style::default());

        assert!(stage.starts_with("drawtext=fontfile=/System/Library/Fonts/Supplemental/Verdana.ttf:"));
        assert!(stage.contains("text='Hello, world!'"));
        assert!(stage.contains("fontcolor=red"));
        assert!(stage.contains("fontsize=48"));
        assert!(stage.contains("box=1:boxcolor=black@0.5:boxborderw=5"));
        assert!(stage.contains("x=(w-text_w)/2:y=h-th-40"));
        assert!(stage.ends_with("enable='between(t,5,10)'"));
    }

    #[test]
    fn top_captions_anchor_to_the_top_edge() {
        let caption = caption("hi", "white", Position::Top, (0, 5));

        let stage = drawtext(&caption, &Style::default());

        assert!(stage.contains("x=(w-text_w)/2:y=40:"));
    }

    #[test]
    fn style_overrides_replace_the_defaults() {
        let style = Style {
            font_file: "/usr/share/fonts/DejaVuSans.ttf".to_string(),
            box_color: "white@0.8".to_string(),
            box_border: 2,
            margin: 20,
        };
        let caption = caption("hi", "black", Position::Top, (0, 5));

        let stage = drawtext(&caption, &style);

        assert!(stage.contains("fontfile=/usr/share/fonts/DejaVuSans.ttf"));
        assert!(stage.contains("boxcolor=white@0.8:boxborderw=2"));
        assert!(stage.contains("y=20:"));
    }

    #[test]
    fn stages_follow_caption_order() {
        let captions = vec![
            caption("one", "red", Position::Top, (0, 2)),
            caption("two", "green", Position::Bottom, (2, 4)),
        ];

        let expression = expression(&captions, &Style::default()).unwrap();

        let stages: Vec<&str> = expression.split(",drawtext=").collect();
        assert_eq!(stages.len(), 2);
        assert!(stages[0].contains("text='one'"));
        assert!(stages[1].contains("text='two'"));
    }

    #[test]
    fn refuses_an_empty_caption_list() {
        let err = expression(&[], &Style::default()).unwrap_err();

        assert_matches!(err, FilterError::EmptyCaptionList);
    }

    #[test]
    fn parses_and_renders_the_worked_example() {
        let script = "\
# intro captions
'Hello, world!':red:48:BOTTOM:5-10
'Hello again!':green:48:TOP:0-5
";

        let captions = Parser::new().parse(script).unwrap();
        let expression = expression(&captions, &Style::default()).unwrap();

        let first = expression.find("text='Hello, world!'").unwrap();
        let second = expression.find("text='Hello again!'").unwrap();
        assert!(first < second);
        assert_eq!(expression.matches("drawtext=").count(), 2);
        assert!(expression.contains("y=h-th-40"));
        assert!(expression.contains("enable='between(t,0,5)'"));
    }
}
