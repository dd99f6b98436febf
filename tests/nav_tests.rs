mod common;

#[cfg(test)]
pub mod nav_tests {
    use rstest::rstest;

    use devnovate::frontend::components::{NAV_LINKS, is_active};

    #[rstest]
    #[case("/", "/", true)]
    #[case("/admin", "/admin", true)]
    #[case("/my-blogs", "/", false)]
    #[case("/admin/", "/admin", false)]
    #[case("/create", "/create-blog", false)]
    #[case("/blog/1", "/", false)]
    fn test_is_active_exact_path(#[case] current: &str, #[case] to: &str, #[case] expected: bool) {
        assert_eq!(is_active(current, to), expected);
    }

    #[test]
    fn test_at_most_one_link_active() {
        for (current, _, _) in NAV_LINKS {
            let active = NAV_LINKS.iter().filter(|(to, _, _)| is_active(current, to)).count();
            assert_eq!(active, 1, "path {}", current);
        }
        assert!(NAV_LINKS.iter().all(|(to, _, _)| !is_active("/settings", to)));
    }

    #[test]
    fn test_nav_link_labels() {
        let labels: Vec<&str> = NAV_LINKS.iter().map(|(_, label, _)| *label).collect();
        assert_eq!(labels, vec!["Home", "My Blogs", "Create Blog", "Admin Dashboard"]);
    }
}
