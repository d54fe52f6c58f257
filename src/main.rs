// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
mod firmware {
    use core::cell::RefCell;

    use cortex_m::interrupt::{self, Mutex};
    use cortex_m_rt::{entry, exception};
    use panic_halt as _;

    use hal::{
        gpio::{gpiob, gpiof, Output, PushPull},
        pac::{self, interrupt},
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use motor_console::{
        app::App,
        config::{BAUD_RATE, HEARTBEAT_PERIOD_MS, PWM_FREQ_HZ},
        control::Heartbeat,
        drivers::{IntervalCell, MotorShield, TachometerCapture},
        hw::{edge::Transition, pins::BoardPins, EdgeInput, Led, Stopwatch, Ticker, Tim1Ch3Pwm, Usart},
    };

    type TachLedPin = gpiof::PF13<Output<PushPull>>;
    type HeartbeatPin = gpiob::PB7<Output<PushPull>>;

    /// Shared with the console loop: written by `EXTI9_5`, read by `spd?`.
    static INTERVAL: IntervalCell = IntervalCell::new();

    // ISR-owned peripherals, moved in once during bring-up.
    static TACH: Mutex<RefCell<Option<TachometerCapture<'static, Stopwatch, TachLedPin>>>> =
        Mutex::new(RefCell::new(None));
    static TACH_INPUT: Mutex<RefCell<Option<EdgeInput<'E', 9>>>> =
        Mutex::new(RefCell::new(None));
    static HEARTBEAT: Mutex<RefCell<Option<Heartbeat<HeartbeatPin>>>> =
        Mutex::new(RefCell::new(None));

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();
        let mut apb2 = rcc.apb2;

        // GPIO
        let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE, dp.GPIOF);

        // LEDs: tachometer LED lit until the first falling edge
        let mut tach_led = Led::active_high(pins.leds.tach);
        tach_led.on();
        let heartbeat = Heartbeat::new(Led::active_high(pins.leds.heartbeat));

        // Motor shield channel A, idle until the console says otherwise
        let pwm = Tim1Ch3Pwm::new(
            dp.TIM1,
            pins.shield_a.pwm,
            clocks.timclk2().raw(),
            PWM_FREQ_HZ,
        );
        let shield = MotorShield::new(pins.shield_a.dir, pins.shield_a.brake, pwm);

        // Tachometer: TIM2 stopwatch + EXTI9 on both edges
        let stopwatch = Stopwatch::tim2(dp.TIM2, clocks.timclk1().raw()).unwrap();
        let mut syscfg = dp.SYSCFG;
        let mut exti = dp.EXTI;
        let tach_input = EdgeInput::listen(pins.tach.pulse, &mut syscfg, &mut apb2, &mut exti);

        interrupt::free(|cs| {
            TACH.borrow(cs).replace(Some(TachometerCapture::new(
                &INTERVAL, stopwatch, tach_led,
            )));
            TACH_INPUT.borrow(cs).replace(Some(tach_input));
            HEARTBEAT.borrow(cs).replace(Some(heartbeat));
        });

        // Heartbeat ticker + tachometer interrupt
        let _ticker = Ticker::start(cp.SYST, clocks.hclk().raw(), HEARTBEAT_PERIOD_MS).unwrap();
        unsafe { pac::NVIC::unmask(pac::Interrupt::EXTI9_5) };

        // USART3 (ST-LINK VCP)
        let usart_cfg = Config {
            baud_rate: BAUD_RATE.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            usart_cfg,
        );
        let mut console = Usart::new(serial);

        let mut app = App::new(shield, &INTERVAL);
        app.banner(&mut console);
        app.run(&mut console)
    }

    #[interrupt]
    fn EXTI9_5() {
        interrupt::free(|cs| {
            let mut input = TACH_INPUT.borrow(cs).borrow_mut();
            let mut tach = TACH.borrow(cs).borrow_mut();
            let (Some(input), Some(tach)) = (input.as_mut(), tach.as_mut()) else {
                return;
            };
            match input.take_edge() {
                Some(Transition::Rising) => tach.on_rising_edge(),
                Some(Transition::Falling) => tach.on_falling_edge(),
                None => {}
            }
        });
    }

    #[exception]
    fn SysTick() {
        interrupt::free(|cs| {
            if let Some(heartbeat) = HEARTBEAT.borrow(cs).borrow_mut().as_mut() {
                heartbeat.on_tick();
            }
        });
    }
}

/// The firmware only exists for the bare-metal target; host builds carry the library alone.
#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("motor-console: build with `--target thumbv7em-none-eabihf` to get the firmware");
}
