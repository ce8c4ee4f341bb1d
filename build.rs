fn main() {
    embuild::espidf::sysenv::output();

    // Collector address and Wi-Fi credentials are baked in at build time.
    for var in ["TOUCH_WIFI_SSID", "TOUCH_WIFI_PASS", "TOUCH_COLLECTOR_ADDR"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
