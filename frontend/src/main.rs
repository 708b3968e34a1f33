#[cfg(target_arch = "wasm32")]
fn main() {
    hero_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("{}", hero_frontend::prerender::prerender_home());
}
