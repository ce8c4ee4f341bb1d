// Touch-ESP - Touch Input Lines
//
// Owns one input PinDriver per touch module.  The idle pull is derived from
// the configured polarity so a floating line reads as "not touched".
// `set_pull` is only available on IO-capable pins, hence `AnyIOPin`.

use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver, Pull};

use touch_events::{InputSource, Polarity};

pub struct TouchInputs<'d> {
    pins: Vec<PinDriver<'d, AnyIOPin, Input>>,
}

impl<'d> TouchInputs<'d> {
    pub fn new(
        pins: impl IntoIterator<Item = AnyIOPin>,
        polarity: Polarity,
    ) -> anyhow::Result<Self> {
        let pull = pull_for(polarity);
        let mut drivers = Vec::new();

        for pin in pins {
            let mut driver = PinDriver::input(pin)?;
            driver.set_pull(pull)?;
            drivers.push(driver);
        }

        Ok(Self { pins: drivers })
    }

    /// GPIO numbers in channel order (index 0 = sensor 1).
    pub fn gpio_numbers(&self) -> Vec<i32> {
        self.pins.iter().map(|driver| driver.pin()).collect()
    }
}

impl InputSource for TouchInputs<'_> {
    fn channel_count(&self) -> usize {
        self.pins.len()
    }

    fn read(&mut self, channel: usize) -> bool {
        self.pins[channel].is_high()
    }
}

fn pull_for(polarity: Polarity) -> Pull {
    if polarity.idle_level() {
        Pull::Up
    } else {
        Pull::Down
    }
}
