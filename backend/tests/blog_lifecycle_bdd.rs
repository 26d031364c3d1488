//! Behaviour tests for the blog lifecycle over the HTTP surface.
//!
//! These scenarios drive the full route table against in-memory stores:
//! registration, owner-scoped creation, listing with owner expansion,
//! owner-only deletion, comments, and statistics.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::{Method, header};
use actix_web::{App, test as actix_test, web};
use bloglist::Trace;
use bloglist::domain::{BlogService, UserId, UserRegistrationService};
use bloglist::inbound::http::configure;
use bloglist::inbound::http::health::HealthState;
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::bcrypt_hasher::BcryptPasswordHasher;
use bloglist::outbound::jwt::JwtTokens;
use bloglist::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;

// -----------------------------------------------------------------------------
// Test World
// -----------------------------------------------------------------------------

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Debug)]
struct Reply {
    status: u16,
    body: Value,
}

#[derive(Default, ScenarioState)]
struct BlogLifecycleWorld {
    runtime: Slot<RuntimeHandle>,
    state: Slot<HttpState>,
    tokens: Slot<JwtTokens>,
    /// Bearer token per username.
    accounts: Slot<HashMap<String, String>>,
    /// Blog id per title.
    blog_ids: Slot<HashMap<String, String>>,
    last_status: Slot<u16>,
    last_body: Slot<Value>,
}

impl BlogLifecycleWorld {
    fn start(&self) {
        let runtime = Runtime::new().expect("create runtime");
        let blogs = Arc::new(InMemoryBlogRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let tokens = JwtTokens::new(b"blog-lifecycle-secret");
        let state = HttpState::from_services(
            Arc::new(BlogService::new(blogs.clone(), users.clone())),
            Arc::new(UserRegistrationService::new(
                users,
                blogs,
                Arc::new(BcryptPasswordHasher::new(4)),
            )),
            Arc::new(tokens.clone()),
        );

        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.state.set(state);
        self.tokens.set(tokens);
        self.accounts.set(HashMap::new());
        self.blog_ids.set(HashMap::new());
    }

    fn send(&self, method: Method, path: &str, token: Option<String>, body: Option<Value>) -> Reply {
        let runtime = self.runtime.get().expect("runtime");
        let state = self.state.get().expect("state");
        let path = path.to_owned();
        runtime.0.block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .app_data(web::Data::new(HealthState::new()))
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let mut request = actix_test::TestRequest::default().method(method).uri(&path);
            if let Some(token) = token {
                request = request.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
            }
            if let Some(body) = body {
                request = request.set_json(body);
            }
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let bytes = actix_test::read_body(response).await;
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON response body")
            };
            Reply { status, body }
        })
    }

    fn record(&self, reply: Reply) -> Reply {
        self.last_status.set(reply.status);
        self.last_body.set(reply.body.clone());
        reply
    }

    fn token_for(&self, username: &str) -> String {
        self.accounts
            .get()
            .and_then(|accounts| accounts.get(username).cloned())
            .unwrap_or_else(|| panic!("no account for {username}"))
    }

    fn blog_id(&self, title: &str) -> String {
        self.blog_ids
            .get()
            .and_then(|ids| ids.get(title).cloned())
            .unwrap_or_else(|| panic!("no blog titled {title}"))
    }

    fn register(&self, username: &str, password: &str) -> Reply {
        let reply = self.send(
            Method::POST,
            "/api/users",
            None,
            Some(json!({"username": username, "name": format!("{username} name"), "password": password})),
        );
        if reply.status == 201 {
            let id = reply.body["id"].as_str().expect("user id");
            let user_id = UserId::new(id).expect("uuid user id");
            let token = self
                .tokens
                .get()
                .expect("tokens")
                .issue(user_id, username)
                .expect("sign token");
            let mut accounts = self.accounts.get().unwrap_or_default();
            accounts.insert(username.to_owned(), token);
            self.accounts.set(accounts);
        }
        self.record(reply)
    }

    fn create_blog(&self, owner: &str, title: &str, likes: u64) {
        let reply = self.send(
            Method::POST,
            "/api/blogs",
            Some(self.token_for(owner)),
            Some(json!({
                "title": title,
                "author": "Michael Chan",
                "url": format!("https://example.com/{title}"),
                "likes": likes,
            })),
        );
        assert_eq!(reply.status, 201, "create {title}: {:?}", reply.body);
        let id = reply.body["id"].as_str().expect("blog id").to_owned();
        let mut ids = self.blog_ids.get().unwrap_or_default();
        ids.insert(title.to_owned(), id);
        self.blog_ids.set(ids);
    }

    fn list_blogs(&self) -> Vec<Value> {
        let reply = self.send(Method::GET, "/api/blogs", None, None);
        assert_eq!(reply.status, 200);
        reply.body.as_array().cloned().expect("blog array")
    }
}

#[fixture]
fn world() -> BlogLifecycleWorld {
    BlogLifecycleWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a running blog list")]
fn a_running_blog_list(world: &BlogLifecycleWorld) {
    world.start();
}

#[given("a registered user {username}")]
fn a_registered_user(world: &BlogLifecycleWorld, username: String) {
    let reply = world.register(&username, "sekret");
    assert_eq!(reply.status, 201, "register {username}: {:?}", reply.body);
}

#[given("user {owner} owns {first} with {first_likes} likes and {second} with {second_likes} likes")]
fn user_owns_two_blogs(
    world: &BlogLifecycleWorld,
    owner: String,
    first: String,
    first_likes: u64,
    second: String,
    second_likes: u64,
) {
    let reply = world.register(&owner, "sekret");
    assert_eq!(reply.status, 201, "register {owner}: {:?}", reply.body);
    world.create_blog(&owner, &first, first_likes);
    world.create_blog(&owner, &second, second_likes);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the client lists blogs")]
fn the_client_lists_blogs(world: &BlogLifecycleWorld) {
    let reply = world.send(Method::GET, "/api/blogs", None, None);
    world.record(reply);
}

#[when("{user} deletes {title}")]
fn user_deletes(world: &BlogLifecycleWorld, user: String, title: String) {
    let path = format!("/api/blogs/{}", world.blog_id(&title));
    let reply = world.send(Method::DELETE, &path, Some(world.token_for(&user)), None);
    world.record(reply);
}

#[when("an anonymous client tries to remove {title}")]
fn an_anonymous_client_tries_to_remove(world: &BlogLifecycleWorld, title: String) {
    let path = format!("/api/blogs/{}", world.blog_id(&title));
    let reply = world.send(Method::DELETE, &path, None, None);
    world.record(reply);
}

#[when("{user} comments on {title} with {text}")]
fn user_comments(world: &BlogLifecycleWorld, user: String, title: String, text: String) {
    let path = format!("/api/blogs/{}/comments", world.blog_id(&title));
    let reply = world.send(
        Method::POST,
        &path,
        Some(world.token_for(&user)),
        Some(json!({"comment": text})),
    );
    world.record(reply);
}

#[when("a client registers username {username} with password {password}")]
fn a_client_registers(world: &BlogLifecycleWorld, username: String, password: String) {
    world.register(&username, &password);
}

#[when("the client requests blog statistics")]
fn the_client_requests_blog_statistics(world: &BlogLifecycleWorld) {
    let reply = world.send(Method::GET, "/api/blogs/stats", None, None);
    world.record(reply);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the response status is {status}")]
fn the_response_status_is(world: &BlogLifecycleWorld, status: u16) {
    assert_eq!(
        world.last_status.get(),
        Some(status),
        "body: {:?}",
        world.last_body.get()
    );
}

#[then("the response code is {code}")]
fn the_response_code_is(world: &BlogLifecycleWorld, code: String) {
    let body = world.last_body.get().expect("response body");
    assert_eq!(body["code"].as_str(), Some(code.as_str()));
}

#[then("{count} blogs are listed")]
fn blogs_are_listed(world: &BlogLifecycleWorld, count: usize) {
    assert_eq!(world.list_blogs().len(), count);
}

#[then("every blog is owned by {owner} with only id, username and name exposed")]
fn every_blog_is_owned_by(world: &BlogLifecycleWorld, owner: String) {
    let body = world.last_body.get().expect("response body");
    let blogs = body.as_array().expect("blog array");
    for blog in blogs {
        let user = blog["user"].as_object().expect("owner object");
        let mut keys: Vec<_> = user.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["id", "name", "username"]);
        assert_eq!(user["username"].as_str(), Some(owner.as_str()));
    }
}

#[then("{owner} no longer owns {title}")]
fn owner_no_longer_owns(world: &BlogLifecycleWorld, owner: String, title: String) {
    let reply = world.send(Method::GET, "/api/users", None, None);
    let users = reply.body.as_array().cloned().expect("user array");
    let user = users
        .iter()
        .find(|user| user["username"].as_str() == Some(owner.as_str()))
        .expect("owner listed");
    let titles: Vec<_> = user["blogs"]
        .as_array()
        .expect("owned blogs")
        .iter()
        .filter_map(|blog| blog["title"].as_str())
        .collect();
    assert!(!titles.contains(&title.as_str()), "still owns {title}");
    assert_eq!(titles.len(), 1);
}

#[then("{title} has {count} comments ending with {text}")]
fn blog_has_comments(world: &BlogLifecycleWorld, title: String, count: usize, text: String) {
    let path = format!("/api/blogs/{}", world.blog_id(&title));
    let reply = world.send(Method::GET, &path, None, None);
    let comments = reply.body["comments"].as_array().cloned().expect("comments");
    assert_eq!(comments.len(), count);
    assert_eq!(comments.last().and_then(Value::as_str), Some(text.as_str()));
}

#[then("total likes are {total}")]
fn total_likes_are(world: &BlogLifecycleWorld, total: u64) {
    let body = world.last_body.get().expect("response body");
    assert_eq!(body["totalLikes"].as_u64(), Some(total));
}

#[then("the favourite blog is {title}")]
fn the_favourite_blog_is(world: &BlogLifecycleWorld, title: String) {
    let body = world.last_body.get().expect("response body");
    assert_eq!(body["favoriteBlog"]["title"].as_str(), Some(title.as_str()));
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "Listing expands each entry's owner"
)]
fn listing_expands_each_entrys_owner(world: BlogLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "A stranger cannot delete another user's blog"
)]
fn a_stranger_cannot_delete(world: BlogLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "The owner deletes a blog"
)]
fn the_owner_deletes_a_blog(world: BlogLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "Deleting without a token is rejected"
)]
fn deleting_without_a_token_is_rejected(world: BlogLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "Comments are appended in order"
)]
fn comments_are_appended_in_order(world: BlogLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "Registration rejects short and duplicate usernames"
)]
fn registration_rejects_short_and_duplicate_usernames(world: BlogLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/blog_lifecycle.feature",
    name = "Statistics summarise the entries"
)]
fn statistics_summarise_the_entries(world: BlogLifecycleWorld) {
    let _ = world;
}
