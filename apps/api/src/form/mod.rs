// Questionnaire pages served to the browser. Rendering lives in `page`;
// the handlers only pick the form and the interface language.

pub mod page;

use axum::extract::Query;
use maud::Markup;
use serde::Deserialize;

use crate::proposal::request::{FormKind, Lang};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

impl PageQuery {
    /// Interface language. Anything other than `en` renders in Polish.
    fn lang(&self) -> Lang {
        match self.lang.as_deref().map(str::trim) {
            Some(l) if l.eq_ignore_ascii_case("en") => Lang::En,
            _ => Lang::Pl,
        }
    }
}

/// GET /
pub async fn cooperation_page(Query(query): Query<PageQuery>) -> Markup {
    page::render(FormKind::Cooperation, query.lang())
}

/// GET /offer
pub async fn module_page(Query(query): Query<PageQuery>) -> Markup {
    page::render(FormKind::Modules, query.lang())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_language_defaults_to_polish() {
        assert_eq!(PageQuery::default().lang(), Lang::Pl);
        assert_eq!(PageQuery { lang: Some("de".into()) }.lang(), Lang::Pl);
        assert_eq!(PageQuery { lang: Some(" EN ".into()) }.lang(), Lang::En);
    }
}
