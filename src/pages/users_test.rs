use super::*;
use crate::net::types::UserId;

#[test]
fn user_label_joins_name_and_email() {
    let user = UserRecord { id: UserId::Number(1), name: "Ann".into(), email: "ann@x.com".into() };
    assert_eq!(user_label(&user), "Ann — ann@x.com");
}
