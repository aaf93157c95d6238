#[cfg(test)]
mod common;

#[cfg(test)]
mod shape_count_tests;

#[cfg(test)]
mod variant_tests;

#[cfg(test)]
mod radius_tests;

#[cfg(test)]
mod text_tests;

#[cfg(test)]
mod product_row_tests;

#[cfg(test)]
mod comment_tests;

#[cfg(test)]
mod table_tests;

#[cfg(test)]
mod chip_tests;

#[cfg(test)]
mod image_tests;

#[cfg(test)]
mod preset_config_tests;

#[cfg(test)]
mod style_override_tests;
