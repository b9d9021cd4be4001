fn main() {
    println!("cargo::rustc-check-cfg=cfg(serve)");
    println!("cargo::rerun-if-env-changed=MUSIC_SERVER_SERVE");
    if std::env::var("MUSIC_SERVER_SERVE").is_ok_and(|s| !s.is_empty()) {
        println!("cargo::rustc-cfg=serve");
    }
}
