// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI Nucleo-144 with an Arduino Motor Shield Rev3.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, gpioe, gpiof, Alternate, Floating, Input, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub leds: Leds,
    pub usart3: Usart3Pins,
    pub shield_a: ShieldAPins,
    pub tach: TachPins,
}

pub struct Leds {
    pub heartbeat: gpiob::PB7<Output<PushPull>>, // LD2 (blue)
    pub tach: gpiof::PF13<Output<PushPull>>,     // D7
}

/// USART3 routed to the ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Motor shield channel A
pub struct ShieldAPins {
    pub pwm: gpioe::PE13<Alternate<1>>,       // D3, TIM1_CH3
    pub dir: gpioa::PA6<Output<PushPull>>,    // D12
    pub brake: gpiod::PD15<Output<PushPull>>, // D9
}

/// Tachometer pulse input
pub struct TachPins {
    pub pulse: gpioe::PE9<Input<Floating>>, // D6, EXTI9
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
        gpiof: pac::GPIOF,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();
        let gpiof = gpiof.split();

        Self {
            leds: Leds {
                heartbeat: gpiob.pb7.into_push_pull_output(),
                tach: gpiof.pf13.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            shield_a: ShieldAPins {
                pwm: gpioe.pe13.into_alternate::<1>(),
                dir: gpioa.pa6.into_push_pull_output(),
                brake: gpiod.pd15.into_push_pull_output(),
            },

            tach: TachPins {
                pulse: gpioe.pe9.into_floating_input(),
            },
        }
    }
}
