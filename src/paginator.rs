use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Page has to be greater than 0")]
    Zero,
    #[error("Page has to be less than page_count ({page_count})")]
    OutOfRange { page: usize, page_count: usize },
}

/// Splits a result list into 1-based pages of `page_size` items.
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Paginator {
            items,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn get_page(&self, page: usize) -> Result<&'a [T], PageError> {
        let page_count = self.page_count();
        match page {
            0 => return Err(PageError::Zero),
            x if x > page_count => return Err(PageError::OutOfRange { page, page_count }),
            _ => {}
        };

        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        Ok(&self.items[start..end])
    }

    /// Page number actually served for `page`: out of range pages fall back to 1.
    pub fn resolve_page(&self, page: usize) -> usize {
        match page {
            0 => 1,
            x if x > self.page_count() => 1,
            x => x,
        }
    }

    /// Like [`Paginator::get_page`], but out of range pages fall back to the first one.
    pub fn get_page_or_first(&self, page: usize) -> &'a [T] {
        self.get_page(self.resolve_page(page)).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_case() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];
        let paginator = Paginator::new(&items, 3);
        assert_eq!(paginator.page_count(), 5);
        assert_eq!(paginator.get_page(1), Ok([1, 2, 3].as_slice()));
        assert_eq!(paginator.get_page(4), Ok([10, 11, 12].as_slice()));
        assert_eq!(paginator.get_page(5), Ok([13].as_slice()));

        assert_eq!(paginator.get_page(0), Err(PageError::Zero));
        assert_eq!(paginator.get_page(6), Err(PageError::OutOfRange { page: 6, page_count: 5 }));
        assert_eq!(paginator.get_page(6).unwrap_err().to_string(), "Page has to be less than page_count (5)");
    }

    #[test]
    fn test_empty() {
        let items: Vec<u32> = vec![];
        let paginator = Paginator::new(&items, 3);
        assert_eq!(paginator.page_count(), 0);
        assert_eq!(paginator.get_page(1), Err(PageError::OutOfRange { page: 1, page_count: 0 }));
        assert!(paginator.get_page_or_first(1).is_empty());
        assert_eq!(paginator.resolve_page(4), 1);
    }

    #[test]
    fn test_fallback_to_first_page() {
        let items = vec!["a", "b", "c"];
        let paginator = Paginator::new(&items, 2);
        assert_eq!(paginator.get_page_or_first(0), ["a", "b"]);
        assert_eq!(paginator.get_page_or_first(9), ["a", "b"]);
        assert_eq!(paginator.get_page_or_first(2), ["c"]);

        assert_eq!(paginator.resolve_page(0), 1);
        assert_eq!(paginator.resolve_page(2), 2);
        assert_eq!(paginator.resolve_page(3), 1);
    }

    #[test]
    fn test_zero_page_size() {
        let items = vec![1, 2];
        let paginator = Paginator::new(&items, 0);
        assert_eq!(paginator.page_count(), 2);
    }
}
