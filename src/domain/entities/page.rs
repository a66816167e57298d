pub const DEFAULT_PAGE_SIZE: i64 = 48;
pub const PAGE_SIZE_OPTIONS: [i64; 3] = [10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: i64,
    pub page_size: i64,
    pub total_count: i64,
}

impl PageState {
    pub fn new(current_page: i64, page_size: i64) -> Self {
        Self {
            current_page,
            page_size,
            total_count: 0,
        }
    }

    pub fn page_count(&self) -> i64 {
        page_count(self.total_count, self.page_size)
    }

    pub fn offset(&self) -> i64 {
        offset(self.current_page, self.page_size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

pub fn page_count(total_count: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total_count <= 0 {
        return 0;
    }
    total_count / page_size + i64::from(total_count % page_size != 0)
}

// Pages past the end are not clamped; the backend answers them with no rows.
pub fn offset(current_page: i64, page_size: i64) -> i64 {
    page_size.saturating_mul(current_page.max(1) - 1)
}

pub fn page_window(current_page: i64, page_count: i64, width: i64) -> Vec<i64> {
    if page_count <= 0 || width <= 0 {
        return Vec::new();
    }
    let width = width.min(page_count);
    let start = current_page.saturating_sub(width / 2).clamp(1, page_count - width + 1);
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(0, 48), 0);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(101, 10), 11);
        assert_eq!(page_count(1, 48), 1);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(offset(1, 20), 0);
        assert_eq!(offset(3, 20), 40);
        assert_eq!(offset(2, 48), 48);
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        assert_eq!(page_count(i64::MAX, 2), i64::MAX / 2 + 1);
        assert_eq!(page_count(i64::MAX, 1), i64::MAX);
        assert_eq!(page_count(i64::MAX, i64::MAX), 1);
        assert_eq!(offset(i64::MAX / 10, 48), i64::MAX);
        assert_eq!(offset(i64::MAX, i64::MAX), i64::MAX);
        assert_eq!(offset(i64::MIN, 48), 0);
        assert_eq!(page_window(i64::MIN, 3, 7), vec![1, 2, 3]);
    }

    #[test]
    fn offset_past_last_page_is_not_clamped() {
        let state = PageState {
            current_page: 5,
            page_size: 10,
            total_count: 12,
        };

        assert_eq!(state.page_count(), 2);
        assert_eq!(state.offset(), 40);
    }

    #[test]
    fn page_window_stays_inside_bounds() {
        assert_eq!(page_window(1, 0, 7), Vec::<i64>::new());
        assert_eq!(page_window(1, 3, 7), vec![1, 2, 3]);
        assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(30, 20, 5), vec![16, 17, 18, 19, 20]);
    }
}
