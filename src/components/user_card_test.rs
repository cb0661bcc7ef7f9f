use super::*;

#[test]
fn profile_href_points_at_user_route() {
    assert_eq!(profile_href(3), "/user/3");
}
