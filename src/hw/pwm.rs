// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-channel PWM on TIM1_CH3 (PE13, Arduino D3) using direct PAC register access.
//!
//! Edge-aligned PWM mode 1 with preloaded compare. TIM1 is an advanced timer, so the main
//! output enable (BDTR.MOE) has to be set as well as CC3E.

use stm32f7xx_hal::{
    gpio::{gpioe, Alternate},
    pac,
};

// TIMx_CCMR2 (output compare mode) bits for channel 3
const CCMR2_OC3PE: u32 = 1 << 3;
const CCMR2_OC3M_PWM1: u32 = 0b110 << 4;
const CCMR2_CH3_MASK: u32 = 0xFF | (1 << 16);
// TIMx_CCER
const CCER_CC3E: u32 = 1 << 8;
// TIMx_BDTR
const BDTR_MOE: u32 = 1 << 15;

pub struct Tim1Ch3Pwm {
    tim: pac::TIM1,
    _pin: gpioe::PE13<Alternate<1>>,
    max_duty: u16,
}

impl Tim1Ch3Pwm {
    /// Configure TIM1 for `freq_hz` PWM on channel 3, output disabled, duty 0.
    ///
    /// `timclk_hz` is the APB2 timer clock (`clocks.timclk2()`).
    pub fn new(
        tim1: pac::TIM1,
        pin: gpioe::PE13<Alternate<1>>,
        timclk_hz: u32,
        freq_hz: u32,
    ) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.tim1en().set_bit());

        let tim = tim1;

        // Split the period between prescaler and auto-reload so ARR fits 16 bits.
        let ticks = (timclk_hz / freq_hz.max(1)).max(2);
        let psc = (ticks - 1) / 0x1_0000;
        let arr = ticks / (psc + 1) - 1;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(arr) });
        tim.ccr3.write(|w| unsafe { w.bits(0) });

        // CH3 as output, PWM mode 1, preload on
        tim.ccmr2_output().modify(|r, w| unsafe {
            w.bits((r.bits() & !CCMR2_CH3_MASK) | CCMR2_OC3M_PWM1 | CCMR2_OC3PE)
        });

        tim.bdtr.modify(|r, w| unsafe { w.bits(r.bits() | BDTR_MOE) });

        // Latch PSC/ARR/CCR3 preloads
        tim.egr.write(|w| w.ug().set_bit());

        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

        Self {
            tim,
            _pin: pin,
            // CCR > ARR holds the output high for the whole period.
            max_duty: (arr + 1).min(u16::MAX as u32) as u16,
        }
    }
}

impl embedded_hal::PwmPin for Tim1Ch3Pwm {
    type Duty = u16;

    fn disable(&mut self) {
        self.tim
            .ccer
            .modify(|r, w| unsafe { w.bits(r.bits() & !CCER_CC3E) });
    }

    fn enable(&mut self) {
        self.tim
            .ccer
            .modify(|r, w| unsafe { w.bits(r.bits() | CCER_CC3E) });
    }

    fn get_duty(&self) -> u16 {
        self.tim.ccr3.read().bits() as u16
    }

    fn get_max_duty(&self) -> u16 {
        self.max_duty
    }

    fn set_duty(&mut self, duty: u16) {
        let duty = duty.min(self.max_duty);
        self.tim.ccr3.write(|w| unsafe { w.bits(duty as u32) });
    }
}
