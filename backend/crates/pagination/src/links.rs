//! Navigation URLs for paged collections.

use url::Url;

use crate::PageRequest;

/// Render `base` pointing at `page`, keeping the size and sort of `request`.
///
/// Existing `page`, `size`, and `sort` query parameters on `base` are
/// replaced; any other parameters are preserved.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, SortOrder, page_link};
/// use url::Url;
///
/// let base = Url::parse("http://localhost/api/events").expect("valid url");
/// let request = PageRequest::new(0, 10)
///     .expect("valid request")
///     .with_sort(vec![SortOrder::desc("id").expect("valid sort")]);
/// let link = page_link(&base, &request, 2);
/// assert_eq!(
///     link.as_str(),
///     "http://localhost/api/events?page=2&size=10&sort=id%2CDESC"
/// );
/// ```
#[must_use]
pub fn page_link(base: &Url, request: &PageRequest, page: u32) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| !matches!(key.as_ref(), "page" | "size" | "sort"))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("page", &page.to_string());
        pairs.append_pair("size", &request.size().to_string());
        for order in request.sort() {
            pairs.append_pair("sort", &order.to_string());
        }
    }
    url
}

#[cfg(test)]
mod tests {
    //! Query rewriting for navigation links.
    use super::*;
    use crate::SortOrder;
    use rstest::rstest;

    fn base(raw: &str) -> Url {
        Url::parse(raw).expect("valid url")
    }

    #[rstest]
    fn link_without_sort_has_page_and_size() {
        let request = PageRequest::new(0, 20).expect("valid request");
        let link = page_link(&base("http://host/api/events"), &request, 0);
        assert_eq!(link.as_str(), "http://host/api/events?page=0&size=20");
    }

    #[rstest]
    fn link_replaces_paging_parameters_and_keeps_others() {
        let request = PageRequest::new(3, 5)
            .expect("valid request")
            .with_sort(vec![
                SortOrder::desc("id").expect("valid sort"),
                SortOrder::asc("name").expect("valid sort"),
            ]);
        let link = page_link(
            &base("http://host/api/events?page=3&size=5&sort=id,DESC&lang=en"),
            &request,
            4,
        );
        let pairs: Vec<(String, String)> = link
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("lang".to_owned(), "en".to_owned()),
                ("page".to_owned(), "4".to_owned()),
                ("size".to_owned(), "5".to_owned()),
                ("sort".to_owned(), "id,DESC".to_owned()),
                ("sort".to_owned(), "name,ASC".to_owned()),
            ]
        );
    }
}
