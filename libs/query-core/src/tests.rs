#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use std::cmp::Ordering;

    use crate::{parse_non_negative, sort_stable_by, Error, Page, SortDir, Window};

    #[test]
    fn test_sort_dir_from_signed_tokens() {
        assert_eq!("1".parse::<SortDir>(), Ok(SortDir::Asc));
        assert_eq!("-1".parse::<SortDir>(), Ok(SortDir::Desc));
    }

    #[test]
    fn test_sort_dir_from_names() {
        assert_eq!("asc".parse::<SortDir>(), Ok(SortDir::Asc));
        assert_eq!("DESC".parse::<SortDir>(), Ok(SortDir::Desc));
    }

    #[test]
    fn test_sort_dir_rejects_other_values() {
        for raw in ["0", "2", "-2", "", "up", " 1"] {
            assert_eq!(
                raw.parse::<SortDir>(),
                Err(Error::InvalidDirection(raw.to_string())),
                "raw={raw:?}"
            );
        }
    }

    #[test]
    fn test_sort_dir_apply() {
        assert_eq!(SortDir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("0"), Ok(0));
        assert_eq!(parse_non_negative("25"), Ok(25));
        assert_eq!(parse_non_negative("-1"), Err(Error::NegativeValue(-1)));
        assert_eq!(
            parse_non_negative("ten"),
            Err(Error::InvalidInteger("ten".to_string()))
        );
        assert_eq!(
            parse_non_negative(""),
            Err(Error::InvalidInteger(String::new()))
        );
        assert!(matches!(
            parse_non_negative("99999999999999999999"),
            Err(Error::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(Window::new(10, 0).bounds(3), 0..3);
        assert_eq!(Window::new(1, 1).bounds(3), 1..2);
        assert_eq!(Window::new(0, 1).bounds(3), 1..1);
        assert_eq!(Window::new(2, 3).bounds(3), 3..3);
        assert_eq!(Window::new(2, 5).bounds(3), 3..3);
        assert_eq!(Window::new(usize::MAX, usize::MAX).bounds(3), 3..3);
        assert_eq!(Window::new(usize::MAX, 1).bounds(3), 1..3);
    }

    #[test]
    fn test_window_slice() {
        let items = [10, 20, 30];
        assert_eq!(Window::new(1, 1).slice(&items), &[20]);
        assert_eq!(Window::new(5, 2).slice(&items), &[30]);
        assert!(Window::new(5, 5).slice(&items).is_empty());
        assert!(Window::new(3, 0).slice::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_sort_stable_by_keeps_tie_order_in_both_directions() {
        let mut asc = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        sort_stable_by(&mut asc, SortDir::Asc, |x, y| x.0.cmp(&y.0));
        assert_eq!(asc, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        let mut desc = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        sort_stable_by(&mut desc, SortDir::Desc, |x, y| x.0.cmp(&y.0));
        assert_eq!(desc, vec![(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
    }

    #[test]
    fn test_page_from_window_has_next() {
        let page = Page::from_window(vec![2], 3, Window::new(1, 1));
        assert_eq!(page.page_info.total, 3);
        assert!(page.page_info.has_next);

        let last = Page::from_window(vec![3], 3, Window::new(1, 2));
        assert!(!last.page_info.has_next);

        let past_end: Page<i32> = Page::from_window(vec![], 3, Window::new(1, 7));
        assert!(!past_end.page_info.has_next);
    }

    #[test]
    fn test_page_map_items() {
        let page = Page::from_window(vec![1, 2], 4, Window::new(2, 0));
        let mapped = page.map_items(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page_info.total, 4);
        assert!(mapped.page_info.has_next);
    }
}
