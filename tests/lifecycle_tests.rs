// Host-side tests for loop lifecycle state: run flags and weak scene access.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod shared {
        include!("../src/core/shared.rs");
    }
}

use crate::core::scene::*;
use crate::core::shared::*;
use std::cell::RefCell;
use std::rc::Rc;

fn owned_scene() -> Rc<RefCell<Scene>> {
    Rc::new(RefCell::new(Scene::new(
        HeroParams::default(),
        SurfaceSize::new(800.0, 600.0),
        11,
    )))
}

#[test]
fn weak_access_resizes_live_scene() {
    let scene = owned_scene();
    let weak = Rc::downgrade(&scene);
    let orb_before = scene.borrow().orb.position;

    let ran = with_live(&weak, |s| s.resize(SurfaceSize::new(1024.0, 512.0)));

    assert!(ran);
    let s = scene.borrow();
    assert_eq!(s.surface, SurfaceSize::new(1024.0, 512.0));
    assert_eq!(s.orb.position, orb_before);
}

#[test]
fn weak_access_does_not_keep_scene_alive() {
    let scene = owned_scene();
    let weak = Rc::downgrade(&scene);
    assert_eq!(Rc::strong_count(&scene), 1);

    // The loop's context is the only owner; dropping it frees the scene.
    drop(scene);
    assert!(weak.upgrade().is_none());

    let mut called = false;
    let ran = with_live(&weak, |s| {
        called = true;
        s.resize(SurfaceSize::new(1.0, 1.0));
    });
    assert!(!ran);
    assert!(!called);
}

#[test]
fn run_flag_clones_share_state() {
    let flag = RunFlag::running();
    let handle = flag.clone();
    assert!(flag.is_running() && handle.is_running());

    assert!(handle.stop());
    assert!(!flag.is_running());
}

#[test]
fn only_first_stop_reports_stopping() {
    let flag = RunFlag::running();
    let default_handle = flag.clone();
    let page_handle = flag.clone();

    assert!(default_handle.stop());
    assert!(!page_handle.stop());
    assert!(!flag.stop());
    assert!(!flag.is_running());
}
