//! The built-in product catalog.

use super::{Category, Product};
use crate::types::{Price, ProductId};

/// Every product the shop sells, in display ("featured") order.
pub static PRODUCTS: &[Product] = &[
    Product {
        id: ProductId::new(1),
        title: "Elegant Evening Dress",
        description: "Beautiful evening dress with premium silk fabric, perfect for special occasions and parties.",
        price: Price::usd(8999),
        image: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=500&h=400&fit=crop",
        features: &[
            "Premium Silk",
            "Perfect Fit",
            "Elegant Design",
            "Multiple Colors",
        ],
        category: Category::Ladies,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(2),
        title: "Casual Summer Top",
        description: "Comfortable and stylish summer top made from breathable cotton fabric.",
        price: Price::usd(2999),
        image: "/static/images/top.png",
        features: &[
            "100% Cotton",
            "Breathable",
            "Casual Style",
            "Easy Care",
        ],
        category: Category::Ladies,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(3),
        title: "Designer Office Wear",
        description: "Professional office wear with modern design and comfortable fit for working women.",
        price: Price::usd(5999),
        image: "/static/images/officegirl.png",
        features: &[
            "Professional Look",
            "Comfortable Fit",
            "Premium Fabric",
            "Office Ready",
        ],
        category: Category::Ladies,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(4),
        title: "Traditional Embroidered Suit",
        description: "Beautiful traditional suit with hand embroidery and premium fabric for cultural events.",
        price: Price::usd(12999),
        image: "https://images.unsplash.com/photo-1585487000160-6ebcfceb0d03?w=500&h=400&fit=crop",
        features: &[
            "Hand Embroidery",
            "Traditional Design",
            "Premium Fabric",
            "Cultural Wear",
        ],
        category: Category::Ladies,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(5),
        title: "Casual Denim Jacket",
        description: "Trendy denim jacket perfect for casual outings and everyday wear.",
        price: Price::usd(4999),
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500&h=400&fit=crop",
        features: &[
            "Premium Denim",
            "Trendy Design",
            "Comfortable Fit",
            "Versatile",
        ],
        category: Category::Ladies,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(6),
        title: "Classic Business Suit",
        description: "Premium business suit with perfect tailoring for professional occasions.",
        price: Price::usd(19999),
        image: "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=500&h=400&fit=crop",
        features: &[
            "Premium Wool",
            "Perfect Tailoring",
            "Professional Look",
            "Durable",
        ],
        category: Category::Mens,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(7),
        title: "Casual T-Shirt Pack",
        description: "Pack of 3 comfortable cotton t-shirts for everyday casual wear.",
        price: Price::usd(3999),
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500&h=400&fit=crop",
        features: &[
            "100% Cotton",
            "Comfortable Fit",
            "Multiple Colors",
            "Pack of 3",
        ],
        category: Category::Mens,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(8),
        title: "Denim Jeans",
        description: "Classic denim jeans with modern fit and comfortable wearing experience.",
        price: Price::usd(5999),
        image: "https://images.unsplash.com/photo-1542272604-787c3835535d?w=500&h=400&fit=crop",
        features: &[
            "Premium Denim",
            "Modern Fit",
            "Comfortable",
            "Durable",
        ],
        category: Category::Mens,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(9),
        title: "Formal Dress Shirt",
        description: "Elegant formal shirt made from premium cotton for business meetings.",
        price: Price::usd(4599),
        image: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=500&h=400&fit=crop",
        features: &[
            "Premium Cotton",
            "Formal Design",
            "Comfortable Collar",
            "Business Ready",
        ],
        category: Category::Mens,
        rating: 3,
        in_stock: false,
    },
    Product {
        id: ProductId::new(10),
        title: "Sports Wear Set",
        description: "Complete sports wear set including track pants and jacket for athletic activities.",
        price: Price::usd(7999),
        image: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=500&h=400&fit=crop",
        features: &[
            "Moisture Wicking",
            "Comfortable Fit",
            "Sports Ready",
            "Complete Set",
        ],
        category: Category::Mens,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(11),
        title: "Leather Formal Shoes",
        description: "Premium leather formal shoes with comfortable cushioning for all-day wear.",
        price: Price::usd(8999),
        image: "https://images.unsplash.com/photo-1542280756-74b2f55e73ab?w=500&h=400&fit=crop",
        features: &[
            "Genuine Leather",
            "Comfortable",
            "Formal Design",
            "Durable",
        ],
        category: Category::Shoes,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(12),
        title: "Sports Running Shoes",
        description: "High-performance running shoes with advanced cushioning technology.",
        price: Price::usd(11999),
        image: "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=500&h=400&fit=crop",
        features: &[
            "Advanced Cushioning",
            "Breathable",
            "Lightweight",
            "Sports Ready",
        ],
        category: Category::Shoes,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(13),
        title: "Comfortable Slippers",
        description: "Soft and comfortable home slippers with memory foam for ultimate comfort.",
        price: Price::usd(2499),
        image: "/static/images/slipper1.png",
        features: &[
            "Memory Foam",
            "Soft Material",
            "Home Comfort",
            "Multiple Sizes",
        ],
        category: Category::Shoes,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(14),
        title: "Casual Sneakers",
        description: "Trendy casual sneakers perfect for everyday wear and casual outings.",
        price: Price::usd(6999),
        image: "https://images.unsplash.com/photo-1600185365483-26d7a4cc7519?w=500&h=400&fit=crop",
        features: &[
            "Trendy Design",
            "Comfortable",
            "Casual Style",
            "Versatile",
        ],
        category: Category::Shoes,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(15),
        title: "Designer Heels",
        description: "Elegant designer heels for women with comfortable height and stylish design.",
        price: Price::usd(7999),
        image: "https://images.unsplash.com/photo-1543163521-1bf539c55dd2?w=500&h=400&fit=crop",
        features: &[
            "Elegant Design",
            "Comfortable Height",
            "Premium Material",
            "Evening Wear",
        ],
        category: Category::Shoes,
        rating: 3,
        in_stock: false,
    },
    Product {
        id: ProductId::new(16),
        title: "Leather Handbag",
        description: "Premium leather handbag with multiple compartments and elegant design.",
        price: Price::usd(14999),
        image: "/static/images/bag1.png",
        features: &[
            "Genuine Leather",
            "Multiple Compartments",
            "Elegant Design",
            "Durable",
        ],
        category: Category::Bags,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(17),
        title: "Designer Clutch",
        description: "Stylish designer clutch perfect for parties and special occasions.",
        price: Price::usd(8999),
        image: "/static/images/wallet2.png",
        features: &[
            "Designer Quality",
            "Evening Wear",
            "Elegant",
            "Compact",
        ],
        category: Category::Bags,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(18),
        title: "Leather Wallet",
        description: "Premium leather wallet with multiple card slots and cash compartment.",
        price: Price::usd(4599),
        image: "/static/images/wallet1.png",
        features: &[
            "Genuine Leather",
            "Multiple Slots",
            "RFID Protection",
            "Compact",
        ],
        category: Category::Bags,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(19),
        title: "Shoulder Bag",
        description: "Spacious shoulder bag with laptop compartment and water-resistant material.",
        price: Price::usd(7999),
        image: "/static/images/bag2.png",
        features: &[
            "Spacious",
            "Laptop Compartment",
            "Water Resistant",
            "Travel Ready",
        ],
        category: Category::Bags,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(20),
        title: "Crossbody Bag",
        description: "Convenient crossbody bag with adjustable strap and multiple pockets.",
        price: Price::usd(5999),
        image: "/static/images/bag3.png",
        features: &[
            "Adjustable Strap",
            "Multiple Pockets",
            "Convenient",
            "Everyday Use",
        ],
        category: Category::Bags,
        rating: 3,
        in_stock: true,
    },
    Product {
        id: ProductId::new(21),
        title: "Premium Gift Set",
        description: "Elegant gift set including perfume, lotion, and body wash in beautiful packaging.",
        price: Price::usd(4999),
        image: "/static/images/gift.png",
        features: &[
            "Premium Quality",
            "Elegant Packaging",
            "Complete Set",
            "Perfect Gifting",
        ],
        category: Category::Gifts,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(22),
        title: "Luxury Perfume",
        description: "Premium luxury perfume with long-lasting fragrance and elegant bottle.",
        price: Price::usd(8999),
        image: "https://images.unsplash.com/photo-1541643600914-78b084683601?w=500&h=400&fit=crop",
        features: &[
            "Long Lasting",
            "Luxury Fragrance",
            "Elegant Bottle",
            "Premium",
        ],
        category: Category::Gifts,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(23),
        title: "Skincare Kit",
        description: "Complete skincare kit including cleanser, toner, and moisturizer.",
        price: Price::usd(6999),
        image: "/static/images/skincare.png",
        features: &[
            "Complete Kit",
            "Premium Ingredients",
            "Skin Care",
            "Daily Use",
        ],
        category: Category::Gifts,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(24),
        title: "Makeup Collection",
        description: "Professional makeup collection with all essential products for complete look.",
        price: Price::usd(9999),
        image: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=500&h=400&fit=crop",
        features: &[
            "Professional Quality",
            "Complete Collection",
            "All Essentials",
            "Premium",
        ],
        category: Category::Gifts,
        rating: 4,
        in_stock: false,
    },
    Product {
        id: ProductId::new(25),
        title: "Aromatherapy Set",
        description: "Relaxing aromatherapy set with essential oils and diffuser for home spa.",
        price: Price::usd(5999),
        image: "/static/images/aromatherapy.png",
        features: &[
            "Relaxing",
            "Essential Oils",
            "Home Spa",
            "Therapeutic",
        ],
        category: Category::Gifts,
        rating: 3,
        in_stock: true,
    },
    Product {
        id: ProductId::new(26),
        title: "Luxury Cotton Blanket",
        description: "Soft and warm cotton blanket perfect for comfortable sleep and home decor.",
        price: Price::usd(3999),
        image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=500&h=400&fit=crop",
        features: &[
            "100% Cotton",
            "Soft & Warm",
            "Comfortable",
            "Home Decor",
        ],
        category: Category::Home,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(27),
        title: "Premium Bath Towels",
        description: "Super soft and absorbent bath towels set for luxurious bathing experience.",
        price: Price::usd(4999),
        image: "/static/images/bath_towels.png",
        features: &[
            "Super Soft",
            "Highly Absorbent",
            "Set of 4",
            "Luxurious",
        ],
        category: Category::Home,
        rating: 4,
        in_stock: true,
    },
    Product {
        id: ProductId::new(28),
        title: "Woolen Throw Blanket",
        description: "Warm woolen throw blanket perfect for winter seasons and cozy evenings.",
        price: Price::usd(5999),
        image: "/static/images/blanket.png",
        features: &[
            "Warm Wool",
            "Cozy",
            "Winter Ready",
            "Soft",
        ],
        category: Category::Home,
        rating: 5,
        in_stock: true,
    },
    Product {
        id: ProductId::new(29),
        title: "Beach Towel Set",
        description: "Large and colorful beach towels perfect for summer vacations and pool parties.",
        price: Price::usd(3499),
        image: "/static/images/beach_towel.png",
        features: &[
            "Large Size",
            "Colorful",
            "Beach Ready",
            "Quick Dry",
        ],
        category: Category::Home,
        rating: 3,
        in_stock: true,
    },
    Product {
        id: ProductId::new(30),
        title: "Kids Blanket Set",
        description: "Colorful and soft blankets designed especially for children with fun patterns.",
        price: Price::usd(2999),
        image: "/static/images/kid.png",
        features: &[
            "Kids Design",
            "Soft Material",
            "Colorful",
            "Safe for Children",
        ],
        category: Category::Home,
        rating: 4,
        in_stock: true,
    },
];
