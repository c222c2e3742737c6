use super::error::AnalyticsError;

/// Slice `[(page_number - 1) * page_size, min(page_number * page_size, len))`.
///
/// Pages past the end are empty, not an error.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Result<&[T], AnalyticsError> {
    if page_size < 1 || page_number < 1 {
        return Err(AnalyticsError::InvalidPage {
            page_size: page_size as i64,
            page_number: page_number as i64,
        });
    }

    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(page_size).min(items.len());
    Ok(&items[start..end])
}

/// Number of pages needed for `len` items; 0 for no items
pub fn total_pages(len: usize, page_size: usize) -> Result<usize, AnalyticsError> {
    if page_size < 1 {
        return Err(AnalyticsError::InvalidPage {
            page_size: page_size as i64,
            page_number: 1,
        });
    }
    Ok(len.div_ceil(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<usize> {
        (0..25).collect()
    }

    #[test]
    fn test_last_partial_page() {
        let items = items();
        let page = paginate(&items, 10, 3).unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page, &items[20..25]);
    }

    #[test]
    fn test_first_page() {
        let items = items();
        assert_eq!(paginate(&items, 10, 1).unwrap(), &items[0..10]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items = items();
        assert!(paginate(&items, 10, 10).unwrap().is_empty());
        assert!(paginate(&items, 10, usize::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_parameters() {
        let items = items();
        assert_eq!(
            paginate(&items, 0, 1).unwrap_err(),
            AnalyticsError::InvalidPage {
                page_size: 0,
                page_number: 1
            }
        );
        assert!(paginate(&items, 10, 0).is_err());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10).unwrap(), 3);
        assert_eq!(total_pages(20, 10).unwrap(), 2);
        assert_eq!(total_pages(0, 10).unwrap(), 0);
        assert!(total_pages(5, 0).is_err());
    }
}
