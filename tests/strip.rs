mod tests {
    use ws281x_strip::color::RGB8;
    use ws281x_strip::{
        ChannelIndex, Color, DriverStatus, Duration, Error, MemoryDriver, SmartLedsWrite,
        Strip, StripConfig, StripType,
    };

    const RED: Color = Color(0x00FF_0000);
    const BLUE: Color = Color(0x0000_00FF);

    fn config(led_count: u16) -> StripConfig {
        StripConfig::new(StripType::WS2811_RGB, led_count, 18)
    }

    #[test]
    fn test_new_strip() {
        let mut driver = MemoryDriver::<16>::new();
        let strip = Strip::new(config(8), &mut driver).unwrap();
        assert_eq!(strip.num_pixels(), 8);
        assert_eq!(strip.channel(), ChannelIndex::Zero);
        assert_eq!(strip.config().led_count, 8);
        assert_eq!(strip.led(0), Some(Color::BLACK));
        strip.fini();
        assert!(!driver.is_active(ChannelIndex::Zero));
    }

    #[test]
    fn test_new_strip_passes_descriptor() {
        let mut driver = MemoryDriver::<16>::new();
        let mut config = StripConfig::new(StripType::SK6812_GRBW, 5, 13);
        config.channel = 1;
        config.brightness = 64;
        config.invert = true;
        let strip = Strip::new(config, &mut driver).unwrap();
        drop(strip);

        let descriptor = driver.descriptor(ChannelIndex::One).unwrap();
        assert_eq!(descriptor.channel, ChannelIndex::One);
        assert_eq!(descriptor.gpio_pin, 13);
        assert_eq!(descriptor.led_count, 5);
        assert_eq!(descriptor.brightness, 64);
        assert!(descriptor.invert);
        assert_eq!(descriptor.strip_type.raw(), 0x1808_1000);
        assert!(!driver.is_active(ChannelIndex::Zero));
    }

    #[test]
    fn test_new_strip_invalid_channel() {
        let mut driver = MemoryDriver::<16>::new();
        let mut config = config(8);
        config.channel = 2;
        let error = Strip::new(config, &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::GENERIC));
        assert!(!driver.is_active(ChannelIndex::Zero));
        assert!(!driver.is_active(ChannelIndex::One));
    }

    #[test]
    fn test_new_strip_without_leds() {
        let mut driver = MemoryDriver::<16>::new();
        let error = Strip::new(config(0), &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::GENERIC));
    }

    #[test]
    fn test_new_strip_driver_errors() {
        let mut driver = MemoryDriver::<16>::new();

        let bad_pin = StripConfig::new(StripType::WS2812, 8, 4);
        let error = Strip::new(bad_pin, &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::ILLEGAL_GPIO));

        let error = Strip::new(config(17), &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::OUT_OF_MEMORY));

        driver.fail_next_init(DriverStatus::DMA);
        let error = Strip::new(config(8), &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::DMA));
        assert_eq!(error.status(), Some(DriverStatus(-10)));
        assert_eq!(error.to_string(), "ws2811 init failed: -10 (DMA error)");
    }

    #[test]
    fn test_new_strip_retry_after_failure() {
        let mut driver = MemoryDriver::<16>::new();
        driver.fail_next_init(DriverStatus::DMA);
        let error = Strip::new(config(8), &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::DMA));
        assert!(!driver.is_active(ChannelIndex::Zero));

        let strip = Strip::new(config(8), &mut driver).unwrap();
        assert_eq!(strip.num_pixels(), 8);
        strip.fini();
        assert!(!driver.is_active(ChannelIndex::Zero));
    }

    #[test]
    fn test_new_strip_channel_already_active() {
        let mut driver = MemoryDriver::<16>::new();
        let strip = Strip::new(config(8), &mut driver).unwrap();
        // Dropping without fini keeps the channel claimed
        drop(strip);

        let error = Strip::new(config(8), &mut driver).unwrap_err();
        assert_eq!(error, Error::Initialization(DriverStatus::GENERIC));
    }

    #[test]
    fn test_set_led() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(8), &mut driver).unwrap();
        strip.set_led(0, RED).unwrap();
        strip.set_led(7, BLUE).unwrap();
        assert_eq!(strip.led(0), Some(RED));
        assert_eq!(strip.led(1), Some(Color::BLACK));
        assert_eq!(strip.led(7), Some(BLUE));
        assert_eq!(strip.led(8), None);
    }

    #[test]
    fn test_set_led_out_of_range() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(8), &mut driver).unwrap();
        let error = strip.set_led(8, RED).unwrap_err();
        assert_eq!(error, Error::IndexOutOfRange { index: 8, len: 8 });
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "LED index 8 out of range for strip of 8");
    }

    #[test]
    fn test_set_strip() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(10), &mut driver).unwrap();
        strip.set_strip(Color(0x1122_3344));
        for index in 0..strip.num_pixels() {
            assert_eq!(strip.led(index), Some(Color(0x1122_3344)));
        }
        drop(strip);
        assert_eq!(driver.leds(ChannelIndex::Zero).unwrap(), &[Color(0x1122_3344); 10]);
    }

    #[test]
    fn test_clear() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(4), &mut driver).unwrap();
        strip.set_strip(RED);
        strip.clear();
        for index in 0..4 {
            assert_eq!(strip.led(index), Some(Color::BLACK));
        }
    }

    #[test]
    fn test_set_bitmap() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(4), &mut driver).unwrap();
        strip.set_strip(BLUE);

        strip.set_bitmap(&[RED, RED]).unwrap();
        assert_eq!(strip.led(0), Some(RED));
        assert_eq!(strip.led(1), Some(RED));
        assert_eq!(strip.led(2), Some(BLUE));

        strip.set_bitmap(&[1u32, 2, 3, 4]).unwrap();
        assert_eq!(strip.led(3), Some(Color(4)));

        let error = strip.set_bitmap(&[Color::BLACK; 5]).unwrap_err();
        assert_eq!(error, Error::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(strip.led(0), Some(Color(1)));
    }

    #[test]
    fn test_render() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(3), &mut driver).unwrap();
        strip.set_led(1, RED).unwrap();
        strip.render().unwrap();
        strip.render().unwrap();
        drop(strip);

        assert_eq!(driver.render_count(ChannelIndex::Zero), 2);
        assert_eq!(
            driver.wire_frame(ChannelIndex::Zero).unwrap(),
            &[[0, 0, 0, 0], [255, 0, 0, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_render_failure_keeps_strip_usable() {
        let mut driver = MemoryDriver::<16>::new();
        driver.fail_next_render(DriverStatus::PWM_SETUP);
        let mut strip = Strip::new(config(3), &mut driver).unwrap();

        let error = strip.render().unwrap_err();
        assert_eq!(error, Error::Render(DriverStatus::PWM_SETUP));
        assert_eq!(
            error.to_string(),
            "ws2811 render failed: -8 (Unable to initialize PWM)"
        );

        strip.set_led(0, RED).unwrap();
        strip.render().unwrap();
        drop(strip);
        assert_eq!(driver.render_count(ChannelIndex::Zero), 1);
    }

    #[test]
    fn test_wait() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(10), &mut driver).unwrap();
        strip.render().unwrap();
        assert!(strip.driver().is_busy(ChannelIndex::Zero));
        strip.wait().unwrap();
        assert!(!strip.driver().is_busy(ChannelIndex::Zero));
        strip.fini();

        // 10 LEDs * 24 bits at 800 kHz plus the latch pause
        assert_eq!(driver.wire_time(), Duration::from_micros(300 + 55));
    }

    #[test]
    fn test_wait_failure() {
        let mut driver = MemoryDriver::<16>::new();
        driver.fail_next_wait(DriverStatus::DMA);
        let mut strip = Strip::new(config(10), &mut driver).unwrap();
        let error = strip.wait().unwrap_err();
        assert_eq!(error, Error::Wait(DriverStatus::DMA));
        assert_eq!(error.to_string(), "ws2811 wait failed: -10 (DMA error)");
        strip.wait().unwrap();
    }

    #[test]
    fn test_fini_releases_channel() {
        let mut driver = MemoryDriver::<16>::new();
        let strip = Strip::new(config(8), &mut driver).unwrap();
        strip.fini();
        assert!(!driver.is_active(ChannelIndex::Zero));

        let strip = Strip::new(config(8), &mut driver).unwrap();
        assert_eq!(strip.num_pixels(), 8);
    }

    #[test]
    fn test_fini_returns_owned_driver() {
        let mut strip = Strip::new(config(2), MemoryDriver::<4>::new()).unwrap();
        strip.set_strip(RED);
        strip.render().unwrap();
        let driver = strip.fini();
        assert!(!driver.is_active(ChannelIndex::Zero));
        assert_eq!(driver.wire_time(), Duration::from_micros(60 + 55));
    }

    #[test]
    fn test_smart_leds_write() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(3), &mut driver).unwrap();
        strip.write([RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)]).unwrap();
        assert_eq!(strip.led(0), Some(Color::rgb(1, 2, 3)));
        assert_eq!(strip.led(1), Some(Color::rgb(4, 5, 6)));
        assert_eq!(strip.led(2), Some(Color::BLACK));
        drop(strip);
        assert_eq!(driver.render_count(ChannelIndex::Zero), 1);
    }

    #[test]
    fn test_smart_leds_write_longer_than_strip() {
        let mut driver = MemoryDriver::<16>::new();
        let mut strip = Strip::new(config(3), &mut driver).unwrap();
        strip.write([RGB8::new(9, 9, 9); 4]).unwrap();
        for index in 0..3 {
            assert_eq!(strip.led(index), Some(Color(0x0009_0909)));
        }
        drop(strip);

        assert_eq!(driver.render_count(ChannelIndex::Zero), 1);
        assert_eq!(driver.wire_frame(ChannelIndex::Zero).unwrap().len(), 3);
    }
}
