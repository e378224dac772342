use crate::error::QuadtreeResult;
use crate::quadtree::{Config, NotifyCallback, ProcessCallback, QuadTree};
use common::{Collidable, Rectangle, Target};

/// Runs one complete broad-phase pass over `bounds`.
///
/// Passing the same entity or group as both `a` and `b` compares it against
/// itself, exactly as if `b` were `None`. The tree is torn down before
/// returning.
pub fn overlap<'a, T: Collidable>(
    bounds: Rectangle,
    config: Config,
    a: Target<'a, T>,
    b: Option<Target<'a, T>>,
    notify: Option<NotifyCallback<'a, T>>,
    process: Option<ProcessCallback<'a, T>>,
) -> QuadtreeResult<bool> {
    let b = b.filter(|b| !b.same_as(&a));
    let mut tree = QuadTree::new_with_config(bounds, config)?;
    tree.load(a, b, notify, process)?;
    let result = tree.execute();
    tree.destroy();
    Ok(result)
}
