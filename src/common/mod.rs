pub(crate) mod vec3d;
#[cfg(test)]
mod tests;
