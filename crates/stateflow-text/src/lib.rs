use ahash::AHashMap;
use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache, Weight};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use stateflow_core::{Bounds, Paint, TextMeasurer};

struct Engine {
    fs: FontSystem,
    cache: SwashCache,
    // Ink bounds per (text, px bits, bold); labels repeat every frame.
    bounds: AHashMap<(String, u32, bool), Bounds>,
}

/// Distinct labels kept before the bounds cache is dropped wholesale.
pub const MAX_CACHED_BOUNDS: usize = 512;

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        let fs = FontSystem::new();
        let cache = SwashCache::new();
        Mutex::new(Engine {
            fs,
            cache,
            bounds: AHashMap::new(),
        })
    })
}

/// Ink bounds of a single shaped line (no wrapping), relative to the
/// origin with the baseline at `y = 0`.
pub fn text_bounds(text: &str, px: f32, bold: bool) -> Bounds {
    if text.is_empty() {
        return Bounds::default();
    }
    let key = (text.to_owned(), px.to_bits(), bold);
    let mut eng = engine().lock();
    if let Some(b) = eng.bounds.get(&key) {
        return *b;
    }

    let Engine { fs, cache, bounds } = &mut *eng;
    let mut buf = Buffer::new(fs, Metrics::new(px, px * 1.3));
    {
        let mut b = buf.borrow_with(fs);
        b.set_size(None, None);
        let attrs = if bold {
            Attrs::new().weight(Weight::BOLD)
        } else {
            Attrs::new()
        };
        b.set_text(text, &attrs, Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }

    let mut ink: Option<Bounds> = None;
    for run in buf.layout_runs() {
        for g in run.glyphs {
            let phys = g.physical((0.0, 0.0), 1.0);
            let Some(img) = cache.get_image(fs, phys.cache_key).as_ref() else {
                continue;
            };
            let p = &img.placement;
            if p.width == 0 || p.height == 0 {
                continue;
            }
            let left = phys.x + p.left;
            let top = phys.y - p.top;
            let glyph = Bounds::new(left, top, left + p.width as i32, top + p.height as i32);
            ink = Some(match ink {
                Some(acc) => Bounds::new(
                    acc.left.min(glyph.left),
                    acc.top.min(glyph.top),
                    acc.right.max(glyph.right),
                    acc.bottom.max(glyph.bottom),
                ),
                None => glyph,
            });
        }
    }

    let out = ink.unwrap_or_else(|| {
        log::debug!("no ink for {text:?} at {px}px; is a system font installed?");
        Bounds::default()
    });
    if bounds.len() >= MAX_CACHED_BOUNDS {
        log::debug!("text bounds cache full ({}), clearing", bounds.len());
        bounds.clear();
    }
    bounds.insert(key, out);
    out
}

#[cfg(test)]
fn cached_bounds() -> usize {
    engine().lock().bounds.len()
}

/// [`TextMeasurer`] backed by the shared cosmic-text font system.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmicTextMeasurer;

impl TextMeasurer for CosmicTextMeasurer {
    fn text_bounds(&self, text: &str, paint: &Paint) -> Bounds {
        text_bounds(text, paint.text_size, paint.fake_bold)
    }
}
