use crate::error::AppResult;
use serde::Serialize;
use server::color_query::{self, ColorQuery};

#[derive(Debug, Serialize)]
pub struct ParseOutput {
    #[serde(flatten)]
    pub query: ColorQuery,
    /// Normalized `type|color` text
    pub encoded: String,
}

#[derive(Debug, Serialize)]
pub struct NextOutput {
    /// Form field name for the new slot
    pub name: String,
    /// `None` once every slot is taken
    pub query: Option<ColorQuery>,
}

pub fn parse(text: &str) -> AppResult<ParseOutput> {
    let query = color_query::parse(text)?;
    Ok(ParseOutput {
        encoded: query.to_string(),
        query,
    })
}

/// Every entry of `queries` must parse; the first invalid one is reported.
pub fn next(queries: &[String]) -> AppResult<NextOutput> {
    let parsed = queries
        .iter()
        .map(|text| color_query::parse(text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NextOutput {
        name: color_query::name(parsed.len()),
        query: color_query::next(&parsed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use server::color_query::ColorQueryType;

    #[test]
    fn test_parse_normalizes_color() {
        let output = parse("tabActiveBackground|#ABCDEF").unwrap();
        assert_eq!(output.query.kind, ColorQueryType::TabActiveBackground);
        assert_eq!(output.encoded, "tabActiveBackground|#abcdef");

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "tabActiveBackground");
        assert_eq!(json["color"], "#abcdef");
    }

    #[test]
    fn test_next_skips_taken_slots() {
        let output = next(&["editorBackground|#000".to_string()]).unwrap();
        assert_eq!(output.name, "color2");
        assert_eq!(
            output.query.map(|query| query.kind),
            Some(ColorQueryType::ActivityBarBackground)
        );
    }

    #[test]
    fn test_next_with_all_slots_taken() {
        let queries: Vec<String> = ColorQueryType::ALL
            .iter()
            .map(|kind| format!("{kind}|#111111"))
            .collect();

        let output = next(&queries).unwrap();
        assert!(output.query.is_none());
    }

    #[test]
    fn test_next_reports_invalid_query() {
        assert!(next(&["bogus|#fff".to_string()]).is_err());
    }
}
