use std::sync::mpsc::{self, Sender};
use std::thread;

use centraliser_core::{CENTRE_HOTKEY_ID, Error, Event, Hotkey, Registration, Result};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, PostThreadMessageW, TranslateMessage, WM_HOTKEY, WM_QUIT,
};

use crate::hotkey::Win32Hotkeys;

/// Starts the message pump on a new thread.
///
/// The thread registers `hotkey` under `CENTRE_HOTKEY_ID`, forwards every
/// `WM_HOTKEY` as `Event::Hotkey`, and releases the registration when the
/// pump exits. Returns once registration has succeeded or failed.
pub fn start(events: Sender<Event>, hotkey: Hotkey) -> Result<EventLoopHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<Result<u32>>();

    let handle = thread::spawn(move || {
        // SAFETY: plain query of the current thread id.
        let thread_id = unsafe { GetCurrentThreadId() };

        let mut hotkeys = Win32Hotkeys;
        let registration = match Registration::acquire(&mut hotkeys, CENTRE_HOTKEY_ID, &hotkey)
        {
            Ok(r) => r,
            Err(e) => {
                let _ = ready_tx.send(Err(e));
                return;
            }
        };

        let _ = ready_tx.send(Ok(thread_id));

        run_message_pump(&events);

        // Unregisters the hotkey on this thread.
        drop(registration);
    });

    let thread_id = ready_rx
        .recv()
        .map_err(|_| Error::EventLoop("event loop thread exited unexpectedly".into()))??;

    Ok(EventLoopHandle { thread_id, handle })
}

/// Handle for stopping the message pump thread.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Posts `WM_QUIT` to the pump and waits for the thread to finish.
    pub fn stop(self) {
        // SAFETY: posts to a thread we created and that owns a queue.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Blocks until `WM_QUIT`, translating `WM_HOTKEY` into events.
///
/// Also returns when the dispatch side has hung up.
fn run_message_pump(events: &Sender<Event>) {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            let id = msg.wParam.0 as i32;
            if events.send(Event::Hotkey { id }).is_err() {
                break;
            }
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
