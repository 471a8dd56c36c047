//! End-to-end login and academy switch flow over the in-memory store.

use std::sync::Arc;

use uuid::Uuid;

use academyhub_auth::jwt::{JwtDecoder, JwtEncoder};
use academyhub_auth::password::PasswordHasher;
use academyhub_auth::rbac::{Permission, PermissionResolver};
use academyhub_auth::session::{AcademySwitcher, SessionManager};
use academyhub_auth::store::{MembershipStore, MemoryStore, UserStore};
use academyhub_core::config::AuthConfig;
use academyhub_core::error::ErrorKind;
use academyhub_entity::membership::CreateMembership;
use academyhub_entity::user::{CreateUser, Role, User};

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        jwt_ttl_minutes: 60,
        password_min_length: 8,
    }
}

struct Harness {
    store: Arc<MemoryStore>,
    manager: SessionManager,
    switcher: AcademySwitcher,
    decoder: JwtDecoder,
    hasher: PasswordHasher,
}

fn harness() -> Harness {
    let config = auth_config();
    let store = Arc::new(MemoryStore::new());
    let hasher = PasswordHasher::new();
    let encoder = JwtEncoder::new(&config);
    let decoder = JwtDecoder::new(&config);

    let manager = SessionManager::new(
        store.clone(),
        store.clone(),
        hasher.clone(),
        encoder.clone(),
        PermissionResolver::new(),
    );
    let switcher = AcademySwitcher::new(
        store.clone(),
        store.clone(),
        store.clone(),
        encoder,
        PermissionResolver::new(),
    );

    Harness {
        store,
        manager,
        switcher,
        decoder,
        hasher,
    }
}

async fn seed_user(h: &Harness, email: &str, password: &str, role: Role) -> User {
    let data = CreateUser {
        email: email.to_string(),
        password_hash: h.hasher.hash_password(password).unwrap(),
        full_name: "Test User".to_string(),
        role,
    };
    UserStore::create(h.store.as_ref(), &data).await.unwrap()
}

async fn stored_user(h: &Harness, id: Uuid) -> User {
    UserStore::find_by_id(h.store.as_ref(), id)
        .await
        .unwrap()
        .unwrap()
}

async fn seed_academy(h: &Harness, name: &str, owner: &User) -> Uuid {
    use academyhub_auth::store::AcademyStore;
    use academyhub_entity::academy::CreateAcademy;

    let academy = AcademyStore::create(
        h.store.as_ref(),
        &CreateAcademy {
            name: name.to_string(),
            address: None,
            contact_email: None,
            contact_phone: None,
            created_by: owner.id,
        },
    )
    .await
    .unwrap();
    academy.id
}

async fn seed_membership(h: &Harness, user: &User, academy_id: Uuid, role: Role) {
    MembershipStore::create(
        h.store.as_ref(),
        &CreateMembership {
            user_id: user.id,
            academy_id,
            role,
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn login_picks_oldest_academy_and_embeds_context() {
    let h = harness();
    let user = seed_user(&h, "owner@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let first = seed_academy(&h, "North Campus", &user).await;
    let second = seed_academy(&h, "South Campus", &user).await;
    seed_membership(&h, &user, first, Role::Admin).await;
    seed_membership(&h, &user, second, Role::Teacher).await;

    let result = h
        .manager
        .login("owner@example.com", "Str0ng-Passw0rd!")
        .await
        .unwrap();

    assert_eq!(result.academy_ids, vec![first, second]);
    assert_eq!(result.active_academy_id, Some(first));
    assert!(result.permissions.contains(&Permission::MemberManage));

    let claims = h.decoder.verify(&result.token.token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.academy_ids, vec![first, second]);
    assert_eq!(claims.active_academy_id, Some(first));

    // The pointer is persisted, not just embedded in the token.
    let stored = stored_user(&h, user.id).await;
    assert_eq!(stored.active_academy_id, Some(first));
}

#[tokio::test]
async fn repeated_logins_yield_the_same_context() {
    let h = harness();
    let user = seed_user(&h, "owner@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let first = seed_academy(&h, "North Campus", &user).await;
    let second = seed_academy(&h, "South Campus", &user).await;
    seed_membership(&h, &user, first, Role::Admin).await;
    seed_membership(&h, &user, second, Role::Teacher).await;

    let a = h
        .manager
        .login("owner@example.com", "Str0ng-Passw0rd!")
        .await
        .unwrap();
    let b = h
        .manager
        .login("owner@example.com", "Str0ng-Passw0rd!")
        .await
        .unwrap();

    let ids_a: std::collections::HashSet<Uuid> = a.academy_ids.iter().copied().collect();
    let ids_b: std::collections::HashSet<Uuid> = b.academy_ids.iter().copied().collect();
    assert_eq!(ids_a, ids_b);
    assert_eq!(a.permissions, b.permissions);
    assert_eq!(a.active_academy_id, b.active_academy_id);

    let claims_a = h.decoder.verify(&a.token.token).unwrap();
    let claims_b = h.decoder.verify(&b.token.token).unwrap();
    assert_eq!(claims_a.academy_ids, claims_b.academy_ids);
    assert_eq!(claims_a.active_academy_id, claims_b.active_academy_id);
}

#[tokio::test]
async fn login_with_no_memberships_has_no_active_academy() {
    let h = harness();
    seed_user(&h, "new@example.com", "Str0ng-Passw0rd!", Role::Admin).await;

    let result = h
        .manager
        .login("new@example.com", "Str0ng-Passw0rd!")
        .await
        .unwrap();

    assert!(result.academy_ids.is_empty());
    assert_eq!(result.active_academy_id, None);
    // Global role still grants academy creation.
    assert!(result.permissions.contains(&Permission::AcademyCreate));
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let h = harness();
    seed_user(&h, "real@example.com", "Str0ng-Passw0rd!", Role::Admin).await;

    let unknown = h
        .manager
        .login("ghost@example.com", "whatever-password")
        .await
        .unwrap_err();
    let wrong = h
        .manager
        .login("real@example.com", "wrong-password")
        .await
        .unwrap_err();

    assert_eq!(unknown.kind, ErrorKind::Unauthorized);
    assert_eq!(wrong.kind, ErrorKind::Unauthorized);
    assert_eq!(unknown.message, wrong.message);
}

#[tokio::test]
async fn switch_updates_pointer_and_reissues_token() {
    let h = harness();
    let user = seed_user(&h, "owner@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let first = seed_academy(&h, "North Campus", &user).await;
    let second = seed_academy(&h, "South Campus", &user).await;
    seed_membership(&h, &user, first, Role::Admin).await;
    seed_membership(&h, &user, second, Role::Staff).await;

    let result = h.switcher.switch(user.id, second).await.unwrap();

    assert_eq!(result.academy.id, second);
    assert_eq!(result.academy_ids, vec![first, second]);
    // Permissions follow the membership role in the target academy.
    assert!(result.permissions.contains(&Permission::StudentView));
    assert!(!result.permissions.contains(&Permission::MemberManage));

    let claims = h.decoder.verify(&result.token.token).unwrap();
    assert_eq!(claims.active_academy_id, Some(second));

    let stored = stored_user(&h, user.id).await;
    assert_eq!(stored.active_academy_id, Some(second));
}

#[tokio::test]
async fn switch_to_unknown_academy_is_not_found_and_keeps_pointer() {
    let h = harness();
    let user = seed_user(&h, "owner@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let first = seed_academy(&h, "North Campus", &user).await;
    seed_membership(&h, &user, first, Role::Admin).await;
    h.switcher.switch(user.id, first).await.unwrap();

    let err = h.switcher.switch(user.id, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let stored = stored_user(&h, user.id).await;
    assert_eq!(stored.active_academy_id, Some(first));
}

#[tokio::test]
async fn switch_without_membership_is_forbidden_and_keeps_pointer() {
    let h = harness();
    let owner = seed_user(&h, "owner@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let outsider = seed_user(&h, "other@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let mine = seed_academy(&h, "North Campus", &owner).await;
    let theirs = seed_academy(&h, "Rival Campus", &outsider).await;
    seed_membership(&h, &owner, mine, Role::Admin).await;
    seed_membership(&h, &outsider, theirs, Role::Admin).await;
    h.switcher.switch(owner.id, mine).await.unwrap();

    let err = h.switcher.switch(owner.id, theirs).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    let stored = stored_user(&h, owner.id).await;
    assert_eq!(stored.active_academy_id, Some(mine));
}

#[tokio::test]
async fn stale_pointer_is_repaired_at_login() {
    let h = harness();
    let user = seed_user(&h, "owner@example.com", "Str0ng-Passw0rd!", Role::Admin).await;
    let first = seed_academy(&h, "North Campus", &user).await;
    seed_membership(&h, &user, first, Role::Admin).await;

    // Pointer left pointing at an academy the user never joined.
    h.store
        .set_active_academy(user.id, Some(Uuid::new_v4()))
        .await
        .unwrap();

    let result = h
        .manager
        .login("owner@example.com", "Str0ng-Passw0rd!")
        .await
        .unwrap();

    assert_eq!(result.active_academy_id, Some(first));
    let stored = stored_user(&h, user.id).await;
    assert_eq!(stored.active_academy_id, Some(first));
}
