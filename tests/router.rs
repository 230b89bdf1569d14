use http::Method;
use segroute::{CoercedValue, Error, ErrorKind, Route, Router};

mod support;
use self::support::{builder, handlers, resolved_handler};

#[test]
fn can_resolve_root() {
    let router = builder().get("/", "HomeController", "index").build().unwrap();

    let matched = router.resolve("GET", "/").unwrap();
    assert_eq!(matched.handler().target(), "HomeController");
    assert_eq!(matched.handler().action(), "index");
    assert!(matched.params().is_empty());
}

#[test]
fn can_resolve_route_among_siblings() {
    let router = builder()
        .get("/", "HomeController", "index")
        .get("/about", "AboutController", "index")
        .build()
        .unwrap();

    assert_eq!(resolved_handler(&router, "GET", "/about").as_deref(), Some("AboutController::index"));

    let err = router.resolve("POST", "/about").unwrap_err();
    assert_eq!(
        err,
        Error::RouteNotFound {
            method: "POST".into(),
            path: "/about".into(),
        }
    );
}

#[test]
fn can_resolve_route_with_parameters() {
    let router = builder().get("/post/{id}", "PostController", "show").build().unwrap();

    let matched = router.resolve("GET", "/post/123").unwrap();
    assert_eq!(matched.handler().action(), "show");
    assert_eq!(matched.params().len(), 1);
    assert_eq!(matched.param("id"), Some(&CoercedValue::Str("123".into())));
}

#[test]
fn can_resolve_route_with_casted_parameters() {
    let router = builder().get("/post/{int|id}", "PostController", "show").build().unwrap();

    let matched = router.resolve("GET", "/post/123").unwrap();
    assert_eq!(matched.param("id"), Some(&CoercedValue::Int(123)));
}

#[test]
fn can_resolve_multiple_typed_parameters() {
    let router = builder()
        .get("/users/{int|id}/posts/{bool|published}/{array|tags}", "UserController", "posts")
        .build()
        .unwrap();

    let matched = router.resolve("GET", "/users/5/posts/0/rust").unwrap();
    let params = matched.params();
    assert_eq!(params.get("id"), Some(&CoercedValue::Int(5)));
    assert_eq!(params.get("published"), Some(&CoercedValue::Bool(false)));
    assert_eq!(params.get("tags"), Some(&CoercedValue::Array(vec!["rust".into()])));
}

#[test]
fn resolve_route_not_found_on_empty_router() {
    let router = builder().build().unwrap();

    let err = router.resolve("GET", "/post/123").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RouteNotFound);
}

#[test]
fn resolve_rejects_unknown_and_lowercase_methods() {
    let router = builder().get("/", "HomeController", "index").build().unwrap();

    for method in &["get", "FETCH", "", "G E T"] {
        assert!(router.resolve(method, "/").unwrap_err().is_not_found(), "method {:?}", method);
    }
}

#[test]
fn resolve_requires_terminal_node() {
    let router = builder().get("/users/{id}/posts", "UserController", "posts").build().unwrap();

    assert!(router.resolve("GET", "/users").is_err());
    assert!(router.resolve("GET", "/users/1").is_err());
    assert!(router.resolve("GET", "/users/1/posts/2").is_err());
    assert!(router.resolve("GET", "/users/1/posts").is_ok());
}

#[test]
fn every_literal_route_resolves_to_itself() {
    let paths = ["/", "/about", "/post", "/post/archive", "/users/active", "/a/b/c/d"];
    let mut router = Router::new(|_: &str, _: &str| true);
    for (i, path) in paths.iter().enumerate() {
        for method in &["GET", "DELETE"] {
            router.add(method, *path, "Controller", format!("action{}", i)).unwrap();
        }
    }

    for (i, path) in paths.iter().enumerate() {
        for method in &["GET", "DELETE"] {
            let matched = router.resolve(method, path).unwrap();
            assert_eq!(matched.route().method(), *method);
            assert_eq!(matched.route().path(), *path);
            assert_eq!(matched.handler().action(), format!("action{}", i));
        }
    }
}

#[test]
fn literal_wins_over_parameter_in_any_order() {
    let forward = builder()
        .get("/users/{id}", "UserController", "show")
        .get("/users/active", "UserController", "active")
        .build()
        .unwrap();
    let reverse = builder()
        .get("/users/active", "UserController", "active")
        .get("/users/{id}", "UserController", "show")
        .build()
        .unwrap();

    for router in &[forward, reverse] {
        let matched = router.resolve("GET", "/users/active").unwrap();
        assert_eq!(matched.handler().action(), "active");
        assert!(!matched.params().has("id"));

        let matched = router.resolve("GET", "/users/42").unwrap();
        assert_eq!(matched.handler().action(), "show");
    }
}

#[test]
fn first_registered_parameter_template_wins() {
    let router = builder()
        .get("/post/{slug}", "PostController", "by_slug")
        .get("/post/{int|id}", "PostController", "show")
        .build()
        .unwrap();

    for _ in 0..16 {
        for path in &["/post/123", "/post/hello-world"] {
            let matched = router.resolve("GET", path).unwrap();
            assert_eq!(matched.handler().action(), "by_slug");
            assert!(matched.params().has("slug"));
            assert!(!matched.params().has("id"));
        }
    }
}

#[test]
fn no_backtracking_after_literal_match() {
    let router = builder()
        .get("/users/active", "UserController", "active")
        .get("/users/{id}/posts", "UserController", "posts")
        .build()
        .unwrap();

    assert!(router.resolve("GET", "/users/active/posts").unwrap_err().is_not_found());
    assert_eq!(
        resolved_handler(&router, "GET", "/users/7/posts").as_deref(),
        Some("UserController::posts")
    );
}

#[test]
fn last_registration_wins() {
    let router = builder()
        .get("/post", "PostController", "index")
        .get("/post", "PostController", "store")
        .build()
        .unwrap();

    assert_eq!(resolved_handler(&router, "GET", "/post").as_deref(), Some("PostController::store"));
    assert_eq!(router.len(), 2);
}

#[test]
fn methods_are_independent_subtrees() {
    let router = builder()
        .get("/post/{int|id}", "PostController", "show")
        .put("/post/{int|id}", "PostController", "update")
        .post("/post", "PostController", "store")
        .build()
        .unwrap();

    assert_eq!(resolved_handler(&router, "PUT", "/post/1").as_deref(), Some("PostController::update"));
    assert_eq!(resolved_handler(&router, "POST", "/post").as_deref(), Some("PostController::store"));
    assert!(router.resolve("POST", "/post/1").is_err());

    assert_eq!(router.allowed_methods("/post/1"), vec![Method::GET, Method::PUT]);
    assert_eq!(router.allowed_methods("/post"), vec![Method::POST]);
    assert!(router.allowed_methods("/nothing").is_empty());
}

#[test]
fn trailing_slash_is_ignored_by_default() {
    let router = builder()
        .get("/about/", "AboutController", "index")
        .get("/post", "PostController", "index")
        .build()
        .unwrap();

    assert!(router.resolve("GET", "/about").is_ok());
    assert!(router.resolve("GET", "/about/").is_ok());
    assert!(router.resolve("GET", "/post/").is_ok());
    assert!(router.resolve("GET", "post").is_ok());
}

#[test]
fn trailing_slash_is_significant_when_strict() {
    let router = builder()
        .strict_slash(true)
        .get("/about/", "AboutController", "index")
        .get("/post", "PostController", "index")
        .build()
        .unwrap();

    assert!(router.resolve("GET", "/about/").is_ok());
    assert!(router.resolve("GET", "/about").is_err());
    assert!(router.resolve("GET", "/post").is_ok());
    assert!(router.resolve("GET", "/post/").is_err());
}

#[test]
fn request_segments_are_percent_decoded() {
    let router = builder()
        .get("/users/{name}", "UserController", "show")
        .get("/post/hello world", "PostController", "index")
        .build()
        .unwrap();

    let matched = router.resolve("GET", "/users/J%C3%BCrgen%2FK").unwrap();
    assert_eq!(matched.param("name"), Some(&CoercedValue::Str("Jürgen/K".into())));
    assert!(router.resolve("GET", "/post/hello%20world").is_ok());
}

#[test]
fn percent_decoding_can_be_disabled() {
    let router = builder()
        .percent_decode(false)
        .get("/users/{name}", "UserController", "show")
        .build()
        .unwrap();

    let matched = router.resolve("GET", "/users/a%20b").unwrap();
    assert_eq!(matched.param("name"), Some(&CoercedValue::Str("a%20b".into())));
}

#[test]
fn add_validates_against_router_registry() {
    let mut router = Router::new(handlers());

    assert_eq!(
        router.add("GET", "/", "MissingController", "index").unwrap_err().kind(),
        ErrorKind::HandlerNotFound
    );
    assert_eq!(
        router.add("get", "/", "HomeController", "index").unwrap_err().kind(),
        ErrorKind::InvalidRouteDefinition
    );
    assert!(router.is_empty());

    router.add("GET", "/", "HomeController", "index").unwrap();
    assert_eq!(router.len(), 1);
}

#[test]
fn add_route_accepts_prebuilt_routes() {
    let route = Route::new("GET", "/post/{int|id}", "PostController", "show", &handlers()).unwrap();
    let mut router = Router::new(handlers());
    router.add_route(route.clone());

    let listed: Vec<_> = router.routes().collect();
    assert_eq!(listed, vec![&route]);

    let matched = router.resolve("GET", "/post/8").unwrap();
    assert_eq!(matched.route(), &route);
}

#[test]
fn match_does_not_alter_route() {
    let router = builder().get("/post/{int|id}", "PostController", "show").build().unwrap();

    let first = router.resolve("GET", "/post/1").unwrap();
    let second = router.resolve("GET", "/post/2").unwrap();

    assert_eq!(first.param("id"), Some(&CoercedValue::Int(1)));
    assert_eq!(second.param("id"), Some(&CoercedValue::Int(2)));
    assert_eq!(first.route(), second.route());

    let (handler, params) = first.into_parts();
    assert_eq!(handler.to_string(), "PostController::show");
    assert_eq!(params.get("id"), Some(&CoercedValue::Int(1)));
}

#[test]
fn every_route_resolves_by_its_own_path() {
    let paths = ["/", "//", "/post/hello%20world", "/a//b", "/about/", "/files/a%2Fb"];

    for &strict in &[false, true] {
        for &decode in &[false, true] {
            let mut b = Router::builder()
                .registry(|_: &str, _: &str| true)
                .strict_slash(strict)
                .percent_decode(decode);
            for (i, path) in paths.iter().enumerate() {
                b = b.get(*path, "Controller", format!("action{}", i));
            }
            let router = b.build().unwrap();

            for route in router.routes() {
                let matched = router
                    .resolve(route.method().as_str(), route.path())
                    .unwrap_or_else(|e| panic!("{} (strict: {}, decode: {}): {}", route.path(), strict, decode, e));
                assert_eq!(matched.handler(), route.handler(), "strict: {}, decode: {}", strict, decode);
            }
        }
    }
}

#[test]
fn double_slash_does_not_match_root() {
    for &strict in &[false, true] {
        let router = Router::builder()
            .registry(|_: &str, _: &str| true)
            .strict_slash(strict)
            .get("/", "HomeController", "index")
            .build()
            .unwrap();

        assert!(router.resolve("GET", "/").is_ok());
        assert!(router.resolve("GET", "//").unwrap_err().is_not_found(), "strict: {}", strict);
    }
}

#[test]
fn encoded_template_literal_matches_encoded_request() {
    let router = builder().get("/post/hello%20world", "PostController", "show").build().unwrap();

    assert_eq!(resolved_handler(&router, "GET", "/post/hello%20world").as_deref(), Some("PostController::show"));
    assert_eq!(resolved_handler(&router, "GET", "/post/hello world").as_deref(), Some("PostController::show"));
}

#[test]
fn repeated_parameter_template_keeps_its_first_position() {
    let router = Router::builder()
        .registry(|_: &str, _: &str| true)
        .get("/p/{a}/x", "Controller", "x")
        .get("/p/{int|b}", "Controller", "b")
        .get("/p/{a}/y", "Controller", "y")
        .build()
        .unwrap();

    let matched = router.resolve("GET", "/p/7/y").unwrap();
    assert_eq!(matched.handler().action(), "y");
    assert_eq!(matched.param("a"), Some(&CoercedValue::Str("7".into())));
    assert!(!matched.params().has("b"));

    assert_eq!(router.resolve("GET", "/p/7/x").unwrap().handler().action(), "x");
    // `{a}` binds first and has no terminal route of its own.
    assert!(router.resolve("GET", "/p/7").unwrap_err().is_not_found());
}

#[test]
fn repeated_parameter_name_is_rejected() {
    let err = builder().get("/users/{id}/posts/{id}", "UserController", "posts").build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRouteDefinition);
}
