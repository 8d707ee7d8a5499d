use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Spring-style `page`/`size`/`sort` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.page() * self.size()
    }

    /// Renders a "column,direction" sort parameter into an ORDER BY
    /// fragment. Columns outside `allowed` fall back to `default`, so
    /// caller input never reaches the SQL text verbatim.
    pub fn order_by(&self, allowed: &[&str], default: &str) -> String {
        let Some(sort) = self.sort.as_deref() else {
            return default.to_string();
        };

        let mut parts = sort.splitn(2, ',');
        let column = parts.next().unwrap_or_default().trim();
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            Some(d) if d == "desc" => "DESC",
            _ => "ASC",
        };

        if allowed.contains(&column) {
            format!("{column} {direction}")
        } else {
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, size: Option<i64>, sort: Option<&str>) -> PageParams {
        PageParams {
            page,
            size,
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn defaults_apply_when_unset() {
        let p = params(None, None, None);
        assert_eq!(p.page(), 0);
        assert_eq!(p.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn size_is_clamped_and_page_floored() {
        assert_eq!(params(None, Some(10_000), None).size(), MAX_PAGE_SIZE);
        assert_eq!(params(None, Some(0), None).size(), 1);
        assert_eq!(params(Some(-3), None, None).page(), 0);
        assert_eq!(params(Some(2), Some(25), None).offset(), 50);
    }

    #[test]
    fn sort_respects_the_allow_list() {
        let allowed = &["id", "title", "points"];
        assert_eq!(
            params(None, None, Some("points,desc")).order_by(allowed, "id ASC"),
            "points DESC"
        );
        assert_eq!(
            params(None, None, Some("title")).order_by(allowed, "id ASC"),
            "title ASC"
        );
        assert_eq!(
            params(None, None, Some("points;DROP TABLE users,desc")).order_by(allowed, "id ASC"),
            "id ASC"
        );
        assert_eq!(params(None, None, None).order_by(allowed, "id ASC"), "id ASC");
    }
}
