#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(boxstore_storefront::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("build with `trunk serve --features csr` to run the storefront");
}
