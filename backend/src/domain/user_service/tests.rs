//! Tests for the users CRUD service.

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserRepository;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn ana() -> User {
    User::new(UserId::new(1), UserDraft::new("ana", "ana@x.com"))
}

fn service(repo: MockUserRepository, policy: MissingUserPolicy) -> UserService<MockUserRepository> {
    UserService::new(Arc::new(repo)).with_missing_user_policy(policy)
}

#[rstest]
#[tokio::test]
async fn list_users_returns_repository_rows(ana: User) {
    let mut repo = MockUserRepository::new();
    let rows = vec![ana.clone()];
    repo.expect_list().times(1).return_once(move || Ok(rows));

    let users = service(repo, MissingUserPolicy::Idempotent)
        .list_users()
        .await
        .expect("list succeeds");

    assert_eq!(users, vec![ana]);
}

#[rstest]
#[tokio::test]
async fn fetch_user_returns_not_found_for_missing_row() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(UserId::new(9)))
        .times(1)
        .returning(|_| Ok(None));

    let err = service(repo, MissingUserPolicy::Idempotent)
        .fetch_user(UserId::new(9))
        .await
        .expect_err("missing row fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), USER_NOT_FOUND_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn create_user_returns_assigned_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .withf(|draft| draft.username() == "ana" && draft.email() == "ana@x.com")
        .times(1)
        .returning(|_| Ok(UserId::new(41)));

    let id = service(repo, MissingUserPolicy::Idempotent)
        .create_user(UserDraft::new("ana", "ana@x.com"))
        .await
        .expect("create succeeds");

    assert_eq!(id, UserId::new(41));
}

#[rstest]
#[case(MissingUserPolicy::Idempotent, true, None)]
#[case(MissingUserPolicy::Idempotent, false, None)]
#[case(MissingUserPolicy::Strict, true, None)]
#[case(MissingUserPolicy::Strict, false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn update_user_applies_missing_user_policy(
    #[case] policy: MissingUserPolicy,
    #[case] matched: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|id, draft| *id == UserId::new(3) && draft.username() == "new")
        .times(1)
        .returning(move |_, _| Ok(matched));

    let result = service(repo, policy)
        .update_user(UserId::new(3), UserDraft::new("new", "new@x.com"))
        .await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}

#[rstest]
#[case(MissingUserPolicy::Idempotent, false, None)]
#[case(MissingUserPolicy::Strict, true, None)]
#[case(MissingUserPolicy::Strict, false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_user_applies_missing_user_policy(
    #[case] policy: MissingUserPolicy,
    #[case] matched: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .with(eq(UserId::new(5)))
        .times(1)
        .returning(move |_| Ok(matched));

    let result = service(repo, policy).delete_user(UserId::new(5)).await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}

#[rstest]
#[case(UserPersistenceError::connection("pool timed out"))]
#[case(UserPersistenceError::query("relation tb_user does not exist"))]
#[tokio::test]
async fn persistence_failures_become_internal_errors(#[case] failure: UserPersistenceError) {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(move || Err(failure));

    let err = service(repo, MissingUserPolicy::Strict)
        .list_users()
        .await
        .expect_err("failure propagates");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().starts_with("list users failed"));
}

#[rstest]
#[case("idempotent", MissingUserPolicy::Idempotent)]
#[case("STRICT", MissingUserPolicy::Strict)]
#[case(" strict ", MissingUserPolicy::Strict)]
fn policy_parses_known_names(#[case] raw: &str, #[case] expected: MissingUserPolicy) {
    assert_eq!(raw.parse::<MissingUserPolicy>(), Ok(expected));
}

#[rstest]
fn policy_rejects_unknown_names() {
    let err = "lenient"
        .parse::<MissingUserPolicy>()
        .expect_err("unknown name fails");
    assert!(err.to_string().contains("lenient"));
}

#[rstest]
fn policy_defaults_to_idempotent() {
    let svc = UserService::new(Arc::new(MockUserRepository::new()));
    assert_eq!(svc.missing_user_policy(), MissingUserPolicy::Idempotent);
    assert_eq!(MissingUserPolicy::Strict.to_string(), "strict");
}
