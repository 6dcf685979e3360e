//! Product catalog and image tables for the storefront pages.
//!
//! The grid cards, their prices, and the name-to-image tables are owned by
//! the presentation layer. The cart only ever sees them through
//! [`ImageResolver`](quill_core::ImageResolver).

use quill_core::{Category, ImageResolver, LayeredImageResolver, Price, Product, TableImageResolver};

/// The image resolver the cart is built with.
pub type StoreImages = LayeredImageResolver<TableImageResolver>;

/// Images for the home page products.
pub const FEATURED_IMAGES: &[(&str, &str)] = &[
    ("Premium Leather Notebook", "assets/images/nb1.jpg"),
    ("Smooth Gel Pen Set", "assets/images/pen1.jpg"),
    ("Professional Watercolor Set", "assets/images/ct4.jpg"),
    ("Weekly Planner 2025", "assets/images/mp1.jpg"),
    ("Bamboo Desk Organizer", "assets/images/dt1.jpg"),
    ("Professional Colored Pencils", "assets/images/pen2.jpg"),
    ("Spiral Bound Notebook", "assets/images/nb2.jpg"),
    ("Premium Art Brush Set", "assets/images/ct6.jpg"),
    ("Office Essentials Kit", "assets/images/ec1.jpg"),
    ("Sticky Note Collection", "assets/images/np1.jpg"),
    ("Luxury Fountain Pen", "assets/images/pen3.jpg"),
    ("Monthly Goal Planner", "assets/images/mp2.jpg"),
    ("Hardcover Journal", "assets/images/nb3.jpg"),
    ("Pocket Notebook Set", "assets/images/nb4.jpg"),
    ("Eco-Friendly Notebook", "assets/images/nb5.jpg"),
    ("Graph Paper Notebook", "assets/images/nb6.jpg"),
    ("Artist Sketchbook", "assets/images/nb7.jpg"),
    ("Lined Composition Book", "assets/images/nb8.jpg"),
    ("Waterproof Notebook", "assets/images/nb9.jpg"),
    ("Executive Notebook", "assets/images/nb10.jpg"),
    ("Student Notebook Pack", "assets/images/nb11.jpg"),
    ("Bullet Journal", "assets/images/nb12.jpg"),
    ("Ballpoint Pen Collection", "assets/images/pen4.jpg"),
    ("Calligraphy Pen Set", "assets/images/pen5.jpg"),
    ("Rollerball Pen Duo", "assets/images/pen6.jpg"),
    ("Marker Set Professional", "assets/images/pen7.jpg"),
    ("Fineliner Pen Pack", "assets/images/pen8.jpg"),
    ("Executive Pen Set", "assets/images/pen9.jpg"),
    ("Highlighter Collection", "assets/images/pen10.jpg"),
];

/// Images used on category pages, consulted before [`FEATURED_IMAGES`].
pub const CATEGORY_IMAGES: &[(&str, &str)] = &[
    // Notebooks
    ("Premium Leather Notebook", "assets/images/nb1.jpg"),
    ("Spiral Bound Notebook", "assets/images/nb2.jpg"),
    ("Hardcover Journal", "assets/images/nb3.jpg"),
    ("Pocket Notebook Set", "assets/images/nb4.jpg"),
    ("Eco-Friendly Notebook", "assets/images/nb5.jpg"),
    ("Graph Paper Notebook", "assets/images/nb6.jpg"),
    ("Artist Sketchbook", "assets/images/nb7.jpg"),
    ("Lined Composition Book", "assets/images/nb8.jpg"),
    ("Waterproof Notebook", "assets/images/nb9.jpg"),
    ("Executive Notebook", "assets/images/nb10.jpg"),
    ("Student Notebook Pack", "assets/images/nb11.jpg"),
    ("Bullet Journal", "assets/images/nb12.jpg"),
    // Pens
    ("Smooth Gel Pen Set", "assets/images/pen1.jpg"),
    ("Professional Colored Pencils", "assets/images/pen2.jpg"),
    ("Luxury Fountain Pen", "assets/images/pen3.jpg"),
    // Art supplies
    ("Professional Watercolor Set", "assets/images/ct4.jpg"),
    ("Premium Art Brush Set", "assets/images/ct6.jpg"),
    // Planners
    ("Weekly Planner 2025", "assets/images/mp1.jpg"),
    ("Monthly Goal Planner", "assets/images/mp2.jpg"),
    // Office essentials
    ("Bamboo Desk Organizer", "assets/images/dt1.jpg"),
    ("Office Essentials Kit", "assets/images/ec1.jpg"),
    ("Sticky Note Collection", "assets/images/np1.jpg"),
];

/// `(name, cents, category, description)` in featured order.
const PRODUCTS: &[(&str, u32, Category, &str)] = &[
    ("Premium Leather Notebook", 2999, Category::Notebooks, "Full-grain leather cover with 192 acid-free pages."),
    ("Smooth Gel Pen Set", 1299, Category::Pens, "Twelve quick-drying gel pens in bright colors."),
    ("Professional Watercolor Set", 3499, Category::ArtSupplies, "Twenty-four artist-grade pans with a travel palette."),
    ("Weekly Planner 2025", 1899, Category::Planners, "Week-on-two-pages layout with monthly overviews."),
    ("Bamboo Desk Organizer", 2499, Category::OfficeEssentials, "Five compartments of sustainable bamboo."),
    ("Professional Colored Pencils", 2199, Category::Pens, "Thirty-six soft-core pencils for blending and layering."),
    ("Spiral Bound Notebook", 899, Category::Notebooks, "Lay-flat spiral binding with perforated pages."),
    ("Premium Art Brush Set", 2799, Category::ArtSupplies, "Ten synthetic sable brushes for watercolor and acrylic."),
    ("Office Essentials Kit", 3999, Category::OfficeEssentials, "Stapler, tape dispenser, scissors, and clips in one box."),
    ("Sticky Note Collection", 799, Category::OfficeEssentials, "Six pads of repositionable notes in pastel shades."),
    ("Luxury Fountain Pen", 5999, Category::Pens, "Brass barrel, steel nib, and a converter for bottled ink."),
    ("Monthly Goal Planner", 1599, Category::Planners, "Undated monthly spreads with habit trackers."),
    ("Hardcover Journal", 1999, Category::Notebooks, "Cloth-bound hardcover with a ribbon marker."),
    ("Pocket Notebook Set", 1199, Category::Notebooks, "Three slim notebooks that fit any pocket."),
    ("Eco-Friendly Notebook", 1299, Category::Notebooks, "Made from 100% recycled paper."),
    ("Graph Paper Notebook", 999, Category::Notebooks, "5mm grid pages for sketches and calculations."),
    ("Artist Sketchbook", 1799, Category::Notebooks, "Heavyweight paper for pencil, ink, and charcoal."),
    ("Lined Composition Book", 499, Category::Notebooks, "Wide-ruled pages with a marbled cover."),
    ("Waterproof Notebook", 1699, Category::Notebooks, "Writes in the rain and survives the field."),
    ("Executive Notebook", 3299, Category::Notebooks, "Vegan leather cover with an elastic closure."),
    ("Student Notebook Pack", 1499, Category::Notebooks, "Five subject notebooks for the school year."),
    ("Bullet Journal", 2299, Category::Notebooks, "Dotted pages, numbered, with an index."),
    ("Ballpoint Pen Collection", 899, Category::Pens, "Ten smooth ballpoints in classic ink colors."),
    ("Calligraphy Pen Set", 2499, Category::Pens, "Three nib widths for lettering practice."),
    ("Rollerball Pen Duo", 1599, Category::Pens, "Two refillable rollerballs in black and blue."),
    ("Marker Set Professional", 2999, Category::Pens, "Dual-tip alcohol markers for illustration."),
    ("Fineliner Pen Pack", 1199, Category::Pens, "Archival ink fineliners from 0.05mm to 0.8mm."),
    ("Executive Pen Set", 4499, Category::Pens, "Matching pen and pencil in a gift box."),
    ("Highlighter Collection", 699, Category::Pens, "Eight chisel-tip highlighters, smear resistant."),
];

/// The image resolver the cart uses: category images over the featured table.
#[must_use]
pub fn image_resolver() -> StoreImages {
    LayeredImageResolver::new(
        TableImageResolver::new(CATEGORY_IMAGES),
        TableImageResolver::new(FEATURED_IMAGES),
    )
}

/// All products in featured order, with images from `images`.
#[must_use]
pub fn products(images: &impl ImageResolver) -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(name, cents, category, description)| {
            Product::new(
                name,
                Price::from_cents(cents),
                category,
                description,
                images.resolve(name),
            )
        })
        .collect()
}
