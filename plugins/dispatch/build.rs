fn main() {
    tauri_plugin::Builder::new(&[
        "get_dispatch_status",
        "is_tag_reading_supported",
        "deliver_discovery_intent",
    ])
    .build();
}
