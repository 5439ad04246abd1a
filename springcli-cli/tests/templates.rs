use springcli_cli::commands::templates::{base_name, java, render, to_camel_case};

// ── render ──────────────────────────────────────────────────────────

#[test]
fn render_replaces_every_occurrence() {
    let out = render("{{a}} and {{a}} with {{b}}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x and x with y");
}

#[test]
fn render_leaves_unknown_keys() {
    assert_eq!(render("{{missing}}", &[("a", "x")]), "{{missing}}");
}

// ── to_camel_case ───────────────────────────────────────────────────

#[test]
fn to_camel_case_basic() {
    assert_eq!(to_camel_case("UserService"), "userService");
}

#[test]
fn to_camel_case_already_camel() {
    assert_eq!(to_camel_case("userService"), "userService");
}

#[test]
fn to_camel_case_empty() {
    assert_eq!(to_camel_case(""), "");
}

// ── base_name ───────────────────────────────────────────────────────

#[test]
fn base_name_strips_suffix() {
    assert_eq!(base_name("UserController", "Controller"), "User");
}

#[test]
fn base_name_without_suffix() {
    assert_eq!(base_name("User", "Controller"), "User");
}

#[test]
fn base_name_keeps_bare_suffix() {
    assert_eq!(base_name("Service", "Service"), "Service");
}

// ── java templates ──────────────────────────────────────────────────

#[test]
fn controller_template() {
    let source = java::controller("com.acme.shop", "Order");
    assert!(source.starts_with("package com.acme.shop.controller;\n"));
    assert!(source.contains("import com.acme.shop.service.OrderService;"));
    assert!(source.contains("public class OrderController {"));
    assert!(source.contains("    @Autowired\n    private OrderService orderService;"));
    assert!(!source.contains("{{"));
}

#[test]
fn service_template() {
    let source = java::service("com.acme.shop", "Order");
    assert!(source.starts_with("package com.acme.shop.service;\n"));
    assert!(source.contains("public interface OrderService {"));
}

#[test]
fn repository_template() {
    let source = java::repository("com.acme.shop", "Order");
    assert!(source.starts_with("package com.acme.shop.repository;\n"));
    assert!(source.contains("import com.acme.shop.entity.Order;"));
    assert!(source.contains("extends JpaRepository<Order, Long>"));
    assert!(!source.contains("{{"));
}

#[test]
fn templates_in_default_package() {
    assert!(java::service("", "Order").starts_with("package service;\n"));
}
