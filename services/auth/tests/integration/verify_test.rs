use futures::future::join_all;

use lms_auth::error::AuthServiceError;
use lms_auth::usecase::authcode::{
    IssueAuthcodeInput, IssueAuthcodeUseCase, VerifiedLogin, VerifyAuthcodeInput,
    VerifyAuthcodeUseCase,
};

use crate::helpers::{
    FailingAuthCodeRepo, MockAuthCodeRepo, TEST_EMAIL, expired_auth_code, test_auth_code,
};

fn input(email: &str, code: &str) -> VerifyAuthcodeInput {
    VerifyAuthcodeInput {
        email: email.to_owned(),
        code: code.to_owned(),
    }
}

#[tokio::test]
async fn should_verify_issued_code_exactly_once() {
    let repo = MockAuthCodeRepo::empty();
    let issued = IssueAuthcodeUseCase {
        auth_codes: repo.clone(),
    }
    .execute(IssueAuthcodeInput {
        email: TEST_EMAIL.to_owned(),
    })
    .await
    .unwrap();

    let verify = VerifyAuthcodeUseCase { auth_codes: repo };

    let first = verify.execute(input(TEST_EMAIL, &issued.code)).await;
    assert_eq!(
        first.unwrap(),
        VerifiedLogin {
            email: TEST_EMAIL.to_owned()
        }
    );

    let second = verify.execute(input(TEST_EMAIL, &issued.code)).await;
    assert!(
        matches!(second, Err(AuthServiceError::InvalidOrExpired)),
        "expected InvalidOrExpired on reuse, got {second:?}"
    );
}

#[tokio::test]
async fn should_mark_only_the_matched_row_used() {
    let target = test_auth_code(TEST_EMAIL, "482913");
    let other = test_auth_code(TEST_EMAIL, "777777");
    let repo = MockAuthCodeRepo::new(vec![target.clone(), other.clone()]);
    let codes_handle = repo.codes_handle();

    VerifyAuthcodeUseCase { auth_codes: repo }
        .execute(input(TEST_EMAIL, "482913"))
        .await
        .unwrap();

    let codes = codes_handle.lock().unwrap();
    assert!(codes.iter().find(|c| c.id == target.id).unwrap().used);
    assert!(!codes.iter().find(|c| c.id == other.id).unwrap().used);
}

#[tokio::test]
async fn should_reject_expired_code() {
    let repo = MockAuthCodeRepo::new(vec![expired_auth_code(TEST_EMAIL, "482913")]);

    let result = VerifyAuthcodeUseCase { auth_codes: repo }
        .execute(input(TEST_EMAIL, "482913"))
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpired)),
        "expected InvalidOrExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let repo = MockAuthCodeRepo::new(vec![test_auth_code(TEST_EMAIL, "482913")]);

    let result = VerifyAuthcodeUseCase { auth_codes: repo }
        .execute(input(TEST_EMAIL, "000000"))
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpired)),
        "expected InvalidOrExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_code_issued_for_another_email() {
    let repo = MockAuthCodeRepo::new(vec![test_auth_code("b@x.com", "482913")]);

    let result = VerifyAuthcodeUseCase { auth_codes: repo }
        .execute(input(TEST_EMAIL, "482913"))
        .await;

    assert!(matches!(result, Err(AuthServiceError::InvalidOrExpired)));
}

#[tokio::test]
async fn should_not_distinguish_wrong_used_and_expired() {
    let mut used = test_auth_code(TEST_EMAIL, "222222");
    used.used = true;
    let repo = MockAuthCodeRepo::new(vec![
        test_auth_code(TEST_EMAIL, "111111"),
        used,
        expired_auth_code(TEST_EMAIL, "333333"),
    ]);
    let verify = VerifyAuthcodeUseCase { auth_codes: repo };

    let mut outcomes = vec![];
    for code in ["999999", "222222", "333333"] {
        let err = verify.execute(input(TEST_EMAIL, code)).await.unwrap_err();
        outcomes.push((err.kind(), err.status(), err.to_string()));
    }

    assert!(outcomes.windows(2).all(|w| w[0] == w[1]), "{outcomes:?}");
}

#[tokio::test]
async fn should_accept_any_of_several_outstanding_codes() {
    let repo = MockAuthCodeRepo::new(vec![
        test_auth_code(TEST_EMAIL, "111111"),
        test_auth_code(TEST_EMAIL, "222222"),
    ]);
    let verify = VerifyAuthcodeUseCase { auth_codes: repo };

    assert!(verify.execute(input(TEST_EMAIL, "222222")).await.is_ok());
    assert!(verify.execute(input(TEST_EMAIL, "111111")).await.is_ok());
}

#[tokio::test]
async fn should_let_exactly_one_concurrent_verification_win() {
    let repo = MockAuthCodeRepo::new(vec![test_auth_code(TEST_EMAIL, "482913")]).racy();

    let attempts = (0..8).map(|_| {
        let verify = VerifyAuthcodeUseCase {
            auth_codes: repo.clone(),
        };
        async move { verify.execute(input(TEST_EMAIL, "482913")).await }
    });
    let results = join_all(attempts).await;

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "exactly one verification should succeed");
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, AuthServiceError::InvalidOrExpired))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_let_exactly_one_parallel_verification_win() {
    let repo = MockAuthCodeRepo::new(vec![test_auth_code(TEST_EMAIL, "482913")]).racy();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let verify = VerifyAuthcodeUseCase {
                auth_codes: repo.clone(),
            };
            tokio::spawn(async move { verify.execute(input(TEST_EMAIL, "482913")).await })
        })
        .collect();

    let mut wins = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => wins += 1,
            Err(e) => assert!(matches!(e, AuthServiceError::InvalidOrExpired), "{e:?}"),
        }
    }
    assert_eq!(wins, 1);
}

#[tokio::test]
async fn should_surface_store_failure_on_verify() {
    let result = VerifyAuthcodeUseCase {
        auth_codes: FailingAuthCodeRepo,
    }
    .execute(input(TEST_EMAIL, "482913"))
    .await;

    assert!(
        matches!(result, Err(AuthServiceError::StoreUnavailable(_))),
        "expected StoreUnavailable, got {result:?}"
    );
}
