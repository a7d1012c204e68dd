#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub image: &'static str,
    pub caption: &'static str,
}

/// One full-screen slideshow on a product page, addressable by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySection {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [GalleryItem],
}

const fn item(image: &'static str, caption: &'static str) -> GalleryItem {
    GalleryItem { image, caption }
}

pub static KITCHENS: [GallerySection; 4] = [
    GallerySection {
        id: "type-islands",
        title: "Islands",
        items: &[
            item("/images/herki.png", "Stone waterfall edge island"),
            item("/images/islanda.jpg", "Island centerpiece with stone top"),
            item("/images/islandb.jpg", "Two-tone island with seating"),
            item("/images/islandc.jpg", "Warm wood island, brass accents"),
            item("/images/islande.jpg", "Monolithic island, matte finish"),
            item("/images/islandf.jpg", "Open-plan island with bar stools"),
        ],
    },
    GallerySection {
        id: "type-galley",
        title: "Galley",
        items: &[
            item("/images/herki1.png", "High-contrast galley cabinetry"),
            item("/images/gal1.jpg", "Compact galley elegance"),
            item("/images/gal2.jpg", "Light & bright galley"),
            item("/images/gal3.jpg", "Galley with statement pendants"),
            item("/images/gal5.jpg", "Warm wood galley with brass"),
            item("/images/gal6.jpg", "Sleek galley, handle-less units"),
        ],
    },
    GallerySection {
        id: "type-lshape",
        title: "L-Shape",
        items: &[
            item("/images/herki2.png", "Matte L-shape with open shelving"),
            item("/images/Lshp1.jpg", "L-shape, warm wood"),
            item("/images/Lshp2.jpg", "L-shape, veneer + stone harmony"),
            item("/images/Lshp3.jpg", "Minimal L-shape with island vibe"),
            item("/images/Lshp4.jpg", "Bright L-shape, integrated lighting"),
            item("/images/Lshp6.jpg", "Elegant L-shape with tall units"),
        ],
    },
    GallerySection {
        id: "type-gshape",
        title: "G-Shape",
        items: &[
            item("/images/herki3.png", "Wraparound G-shape, stone splash"),
            item("/images/gshp1.jpg", "G-shape storage master"),
            item("/images/gshp2.jpg", "G-shape with family nook"),
            item("/images/gshp3.jpg", "Compact city G-shape"),
            item("/images/gshp5.jpg", "G-shape, premium appliances"),
            item("/images/gshp6.jpg", "G-shape, soft minimal palette"),
        ],
    },
];

pub static WARDROBES: [GallerySection; 3] = [
    GallerySection {
        id: "type-walkin",
        title: "Walk-in",
        items: &[
            item("/images/wrdpp.png", "Open shelving showcase"),
            item("/images/walkina.jpg", "Walk-in wardrobe with central island"),
            item("/images/walkinb.jpg", "Warm veneer walk-in"),
            item("/images/walkinc.jpg", "Walk-in with glass partitions"),
            item("/images/walkine.jpg", "Walk-in with mirrored doors"),
            item("/images/walkinf.jpg", "Boutique-style lighting"),
        ],
    },
    GallerySection {
        id: "type-sliding",
        title: "Sliding",
        items: &[
            item("/images/wrdpp1.png", "Handle-less graphite sliding"),
            item("/images/slidinga.jpg", "Sliding doors with bronze mirror"),
            item("/images/slidingb.jpg", "Floor-to-ceiling sliding panels"),
            item("/images/slidingc.jpg", "Sliding smoked glass fronts"),
            item("/images/slidinge.jpg", "Soft-close aluminum frames"),
            item("/images/slidingf.jpg", "Textured panel finishes"),
        ],
    },
    GallerySection {
        id: "type-openable",
        title: "Openable",
        items: &[
            item("/images/wrdpp2.png", "Compact master hinged wardrobe"),
            item("/images/open1.jpg", "Openable wardrobe, matte finish"),
            item("/images/open2.jpg", "Minimal white hinged doors"),
            item("/images/open3.jpg", "Soft beige hinged wardrobe"),
            item("/images/open5.jpg", "Paneled classic doors"),
            item("/images/open6.jpg", "Hinged wardrobe with glass inlays"),
        ],
    },
];

pub static SHUTTERS: [GallerySection; 3] = [
    GallerySection {
        id: "type-hinged",
        title: "Hinged",
        items: &[
            item("/images/shutters-hinged1.jpg", "Hinged shutters, classic louvers"),
            item("/images/shutters-hinged2.jpg", "Wide-panel hinged shutters"),
            item("/images/shutters-hinged3.jpg", "Hinged shutters with arch detail"),
            item("/images/shutters-hinged4.jpg", "Matte white hinged shutters, bay window"),
            item("/images/shutters-hinged5.jpg", "Walnut hinged shutters, living room"),
            item("/images/shutters-hinged6.jpg", "Hinged shutters with brass hardware"),
        ],
    },
    GallerySection {
        id: "type-bifold",
        title: "Bi-Fold",
        items: &[
            item("/images/shutters-bifold1.jpg", "Bi-fold shutters, airy opening"),
            item("/images/shutters-bifold2.jpg", "Bi-fold plantation shutters"),
            item("/images/shutters-bifold3.jpg", "Bi-fold with tall panels"),
            item("/images/shutters-bifold4.jpg", "Textured finish bi-fold shutters"),
            item("/images/shutters-bifold5.jpg", "Bi-fold shutters, modern frame"),
            item("/images/shutters-bifold6.jpg", "Corner bi-fold shutters solution"),
        ],
    },
    GallerySection {
        id: "type-sliding",
        title: "Sliding",
        items: &[
            item("/images/shutters-sliding1.jpg", "Sliding shutters, track system"),
            item("/images/shutters-sliding2.jpg", "Wide-span sliding shutters"),
            item("/images/shutters-sliding3.jpg", "Sliding shutters with glass partition"),
            item("/images/shutters-sliding4.jpg", "Dark timber sliding shutters"),
            item("/images/shutters-sliding5.jpg", "Minimal sliding shutters, matte finish"),
            item("/images/shutters-sliding6.jpg", "Outdoor sliding shutter screen"),
        ],
    },
];

pub static PARTITIONS: [GallerySection; 3] = [
    GallerySection {
        id: "type-glass",
        title: "Metal & Glass",
        items: &[
            item("/images/partition-glass1.jpg", "Slim black frame, clear glass"),
            item("/images/partition-glass2.jpg", "Fluted glass study divider"),
            item("/images/partition-glass3.jpg", "Bronze mesh and glass screen"),
            item("/images/partition-glass4.jpg", "Smart glass, privacy on tap"),
        ],
    },
    GallerySection {
        id: "type-shelving",
        title: "Open Shelving",
        items: &[
            item("/images/partition-shelf1.jpg", "Walnut shelving divider"),
            item("/images/partition-shelf2.jpg", "Floating shelves between living and dining"),
            item("/images/partition-shelf3.jpg", "Display niches with warm lighting"),
            item("/images/partition-shelf4.jpg", "Lattice divider, oak finish"),
        ],
    },
    GallerySection {
        id: "type-solid",
        title: "Solid & Acoustic",
        items: &[
            item("/images/partition-solid1.jpg", "Fabric-wrapped acoustic wall"),
            item("/images/partition-solid2.jpg", "Sliding solid panels, matte lacquer"),
            item("/images/partition-solid3.jpg", "Pocket doors with veneer finish"),
            item("/images/partition-solid4.jpg", "Stone-look pivot partition"),
        ],
    },
];

pub static PORTFOLIO: [GalleryItem; 6] = [
    item("/images/portfolio-kitchen.jpg", "Gourmet Kitchen"),
    item("/images/portfolio-suite.jpg", "Master Suite"),
    item("/images/portfolio-living.jpg", "Grand Living Room"),
    item("/images/portfolio-bath.jpg", "Spa Bathroom"),
    item("/images/portfolio-dining.jpg", "Formal Dining"),
    item("/images/portfolio-office.jpg", "Executive Office"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub project: &'static str,
    pub quote: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Mitchell",
        title: "CEO, Tech Innovations",
        project: "Manhattan Penthouse",
        quote: "LUSSO transformed our penthouse into a masterpiece. Their attention to detail and understanding of luxury is unparalleled.",
    },
    Testimonial {
        name: "David Chen",
        title: "Investment Banker",
        project: "Beverly Hills Estate",
        quote: "They didn't just design our home; they created a lifestyle. The quality of craftsmanship exceeded all expectations.",
    },
    Testimonial {
        name: "Isabella Rodriguez",
        title: "Art Collector",
        project: "Miami Beach Villa",
        quote: "LUSSO understood our vision perfectly and created spaces that showcase our art collection beautifully.",
    },
    Testimonial {
        name: "James Thompson",
        title: "Real Estate Developer",
        project: "London Townhouse",
        quote: "Their innovative approach to luxury design has set a new standard in our industry. Simply phenomenal work.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub logo: &'static str,
}

const fn brand(name: &'static str, logo: &'static str) -> Brand {
    Brand { name, logo }
}

pub static BRANDS: [Brand; 19] = [
    brand("Blum", "/images/blum.png"),
    brand("Aristo", "/images/aristo.png"),
    brand("Casantro", "/images/casantro.jpeg"),
    brand("Häfele", "/images/hafele.png"),
    brand("Hettich", "/images/hettich.png"),
    brand("Kesseböhmer", "/images/kessebohmer.png"),
    brand("Indoline", "/images/indoline.png"),
    brand("Liebherr", "/images/liebherr.png"),
    brand("Makwana", "/images/makwana.png"),
    brand("Navaki", "/images/navaki.png"),
    brand("Quantra Quartz", "/images/quantra.png"),
    brand("Salice", "/images/salice.png"),
    brand("Bosch", "/images/bosch.png"),
    brand("Siemens", "/images/siemens.png"),
    brand("Grayzo", "/images/grayzo.png"),
    brand("Forever", "/images/forever.png"),
    brand("Dyson", "/images/dyson.png"),
    brand("Caesarstone", "/images/ceaserstone.png"),
    brand("Wesmark", "/images/wesmark.png"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub static JOURNEY: [JourneyStep; 6] = [
    JourneyStep {
        title: "Let's Connect",
        description: "Fill out a quick form or give us a call. Tell us about your dream kitchen or wardrobe.",
    },
    JourneyStep {
        title: "Design Consultation",
        description: "Our experts get in touch to understand your space, style, and budget. We co-create the perfect design, just for you.",
    },
    JourneyStep {
        title: "Experience It Live",
        description: "Visit our Experience Center to explore materials, finishes, and modular layouts in person.",
    },
    JourneyStep {
        title: "Final Touches & Quote",
        description: "We finalize the design, share a transparent quote, and lock in timelines.",
    },
    JourneyStep {
        title: "Installation Begins",
        description: "Sit back and relax. Our team handles delivery and installation with care and precision.",
    },
    JourneyStep {
        title: "Aftercare & Support",
        description: "Even after the work is done, we're just a call away for maintenance or upgrades.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gallery_has_images() {
        let sections = KITCHENS.iter().chain(&WARDROBES).chain(&SHUTTERS).chain(&PARTITIONS);
        for section in sections {
            assert!(!section.items.is_empty(), "{} is empty", section.id);
            assert!(section.items.iter().all(|i| i.image.starts_with("/images/")));
        }
    }

    #[test]
    fn section_ids_are_unique_per_page() {
        for page in [&KITCHENS[..], &WARDROBES[..], &SHUTTERS[..], &PARTITIONS[..]] {
            let mut ids: Vec<_> = page.iter().map(|s| s.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), page.len());
        }
    }
}
