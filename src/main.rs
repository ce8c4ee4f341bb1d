// Touch-ESP - Firmware Entry Point
//
// Boot sequence:
//   1. Configure the touch input lines (pull derived from polarity).
//   2. Bring up Wi-Fi in station mode (a failed association is not fatal).
//   3. Open the UDP socket towards the collector.
//   4. Spawn the monitor task, which debounces the lines and sends presses.

mod config;
mod drivers;
mod input;
mod tasks;

use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{AnyIOPin, IOPin};
use esp_idf_hal::prelude::*;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use crate::config::*;
use crate::drivers::udp::UdpTransport;
use crate::drivers::wifi::WifiLink;
use crate::input::TouchInputs;

// ---------------------------------------------------------------------------
// Utility: milliseconds since boot
// ---------------------------------------------------------------------------
pub fn now_ms() -> u64 {
    unsafe { (esp_idf_sys::esp_timer_get_time() / 1000) as u64 }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------
fn main() -> anyhow::Result<()> {
    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("Touch-ESP firmware starting…");

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;
    let sys_loop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    // ---- Touch inputs -----------------------------------------------------
    // Channel order: S1..S5.
    let pins: [AnyIOPin; TOUCH_CHANNELS] = [
        peripherals.pins.gpio15.downgrade(),
        peripherals.pins.gpio4.downgrade(),
        peripherals.pins.gpio18.downgrade(),
        peripherals.pins.gpio19.downgrade(),
        peripherals.pins.gpio21.downgrade(),
    ];
    let inputs: TouchInputs<'static> = TouchInputs::new(pins, TOUCH_POLARITY)?;
    log::info!("Touch sensors initialized on GPIO {:?}", inputs.gpio_numbers());

    // ---- Network ----------------------------------------------------------
    let wifi = WifiLink::connect(peripherals.modem, sys_loop, nvs)?;
    let transport = UdpTransport::new(COLLECTOR_ADDR, wifi)?;

    // ---- Spawn tasks (map to FreeRTOS tasks via std::thread) ---------------
    thread::Builder::new()
        .name("monitor".into())
        .stack_size(STACK_MONITOR)
        .spawn(move || {
            tasks::monitor::monitor_task(inputs, transport);
        })?;

    // Main thread has nothing left to do - park it forever.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
