// Touch-ESP - Wi-Fi Station Link
//
// Associates once at boot.  If that fails the firmware keeps running (touch
// state still tracks correctly) and `maintain` retries in the background with
// a non-blocking connect request.

use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};

use crate::config::*;

pub struct WifiLink {
    wifi: BlockingWifi<EspWifi<'static>>,
    last_attempt_ms: u64,
}

impl WifiLink {
    /// Configure station mode and try one blocking association.
    pub fn connect(
        modem: Modem,
        sys_loop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
    ) -> anyhow::Result<Self> {
        let mut wifi = BlockingWifi::wrap(
            EspWifi::new(modem, sys_loop.clone(), Some(nvs))?,
            sys_loop,
        )?;

        let auth_method = if WIFI_PASS.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: WIFI_SSID
                .try_into()
                .map_err(|_| anyhow::anyhow!("SSID too long: {}", WIFI_SSID))?,
            password: WIFI_PASS
                .try_into()
                .map_err(|_| anyhow::anyhow!("Wi-Fi password too long"))?,
            auth_method,
            ..Default::default()
        }))?;

        wifi.start()?;
        log::info!("Wi-Fi started, connecting to '{}'", WIFI_SSID);

        match wifi.connect().and_then(|_| wifi.wait_netif_up()) {
            Ok(()) => {
                let ip = wifi.wifi().sta_netif().get_ip_info()?;
                log::info!("Wi-Fi connected, IP {}", ip.ip);
            }
            Err(e) => {
                log::warn!("Wi-Fi association failed ({}), will keep retrying", e);
            }
        }

        Ok(Self {
            wifi,
            last_attempt_ms: crate::now_ms(),
        })
    }

    pub fn is_up(&self) -> bool {
        self.wifi.is_up().unwrap_or(false)
    }

    /// Fire a reconnect request if the link is down and the retry interval
    /// has passed.  Never blocks the polling loop.
    pub fn maintain(&mut self, now: u64) {
        if self.is_up() || now.saturating_sub(self.last_attempt_ms) < WIFI_RETRY_INTERVAL_MS {
            return;
        }
        self.last_attempt_ms = now;

        log::info!("Wi-Fi down, requesting reconnect");
        if let Err(e) = self.wifi.wifi_mut().connect() {
            log::warn!("Wi-Fi reconnect request failed: {}", e);
        }
    }
}
